//! Refilling scan buffer.
//!
//! # Layout
//!
//! ```text
//! [ consumed | current token | read, unscanned | free       ]
//! 0          token            cursor            limit        capacity
//! ```
//!
//! Everything before `token` may be discarded at the next refill. The bytes
//! of the token being matched, `[token, cursor)`, always survive a refill:
//! they are moved (compaction) or copied into a larger allocation (growth),
//! and all four cursors shift by the same amount. Cursors are indices, so a
//! reallocation never leaves anything dangling.
//!
//! `marker` sits somewhere in `[token, cursor]` and shifts with the others;
//! the scanner uses it for the start of a sub-lexeme inside a token.
//!
//! # End of Input
//!
//! Once the source is exhausted and there is room, [`LOOKAHEAD_PADDING`]
//! zero bytes are appended past the real data and `limit` moves past them.
//! Peeking into the padding yields `0`, which the scanner treats as end of
//! input only when the position is at or past the real end; an interior NUL
//! byte is ordinary (invalid) input.

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;
use tracing::{debug, trace};

use crate::Source;

/// Capacity of the first allocation.
pub const INITIAL_BUFFER_SIZE: usize = 64 * 1024;

/// Zero bytes appended after the real input once the source is exhausted.
pub const LOOKAHEAD_PADDING: usize = 16;

/// Why a refill produced no new bytes.
#[derive(Debug, Error)]
pub enum FillError {
    /// The source was already exhausted. Not a hard error.
    #[error("end of input")]
    Exhausted,
    #[error("unable to reallocate lexer buffer")]
    OutOfMemory(#[from] TryReserveError),
    #[error("lexer buffer size overflows the address space")]
    CapacityOverflow,
    #[error("unable to read source: {0}")]
    Read(#[from] io::Error),
}

/// A growable window over a [`Source`].
#[derive(Debug)]
pub struct LexBuffer<'src> {
    source: Source<'src>,
    buf: Vec<u8>,
    token: usize,
    marker: usize,
    cursor: usize,
    limit: usize,
    /// Absolute source offset of `buf[0]`.
    file_offset: usize,
    eof: bool,
    /// A refill failed for a reason other than exhaustion; no more bytes
    /// will arrive.
    stalled: bool,
    fatal: Option<FillError>,
    initial_size: usize,
}

impl<'src> LexBuffer<'src> {
    /// Wrap `source`. Nothing is allocated or read until the first peek.
    pub fn new(source: Source<'src>) -> Self {
        Self::with_initial_size(source, INITIAL_BUFFER_SIZE)
    }

    /// Like [`LexBuffer::new`] with a custom first allocation size.
    pub fn with_initial_size(source: Source<'src>, initial_size: usize) -> Self {
        LexBuffer {
            source,
            buf: Vec::new(),
            token: 0,
            marker: 0,
            cursor: 0,
            limit: 0,
            file_offset: 0,
            eof: false,
            stalled: false,
            fatal: None,
            initial_size: initial_size.max(1),
        }
    }

    /// Change the size of the first allocation. Has no effect once the
    /// buffer has been allocated.
    pub fn set_initial_size(&mut self, initial_size: usize) {
        if self.buf.is_empty() {
            self.initial_size = initial_size.max(1);
        }
    }

    // ─── Refill ───

    /// Make room for at least `need` more bytes past `limit` and read into it.
    ///
    /// Discards `[0, token)` by compacting in place when that frees enough
    /// space, and otherwise grows the allocation geometrically until it
    /// holds `need` bytes plus the lookahead padding.
    pub fn fill(&mut self, need: usize) -> Result<(), FillError> {
        if self.eof {
            return Err(FillError::Exhausted);
        }

        let free = self.token;
        if free < need {
            self.grow(need, free)?;
        } else {
            trace!(discarded = free, "compacting lexer buffer");
            self.buf.copy_within(self.token..self.limit, 0);
        }
        self.token -= free;
        self.marker -= free;
        self.cursor -= free;
        self.limit -= free;
        self.file_offset += free;

        let tail = self.buf.len() - self.limit;
        let read = self.source.read(&mut self.buf[self.limit..])?;
        self.limit += read;

        if read < tail && self.buf.len() - self.limit >= LOOKAHEAD_PADDING {
            self.buf[self.limit..self.limit + LOOKAHEAD_PADDING].fill(0);
            self.limit += LOOKAHEAD_PADDING;
            self.eof = true;
            debug!(
                length = self.file_offset + self.limit - LOOKAHEAD_PADDING,
                "end of input reached"
            );
        }
        Ok(())
    }

    /// Replace the allocation with a larger one holding `[token, limit)` at
    /// index 0. Cursors are shifted by the caller.
    fn grow(&mut self, need: usize, free: usize) -> Result<(), FillError> {
        let old_size = self.buf.len();
        let mut new_size = if old_size == 0 {
            self.initial_size
        } else {
            old_size.checked_mul(2).ok_or(FillError::CapacityOverflow)?
        };
        while (new_size - old_size) + free < need + LOOKAHEAD_PADDING {
            new_size = new_size
                .checked_mul(2)
                .ok_or(FillError::CapacityOverflow)?;
        }
        trace!(old_size, new_size, "growing lexer buffer");

        let mut grown = Vec::new();
        grown.try_reserve_exact(new_size)?;
        grown.extend_from_slice(&self.buf[self.token..self.limit]);
        grown.resize(new_size, 0);
        self.buf = grown;
        Ok(())
    }

    /// Guarantee that the byte at `cursor + n` is inside `[0, limit)`.
    ///
    /// Returns `false` when the source cannot supply it. A failure other
    /// than exhaustion is parked for [`LexBuffer::take_fatal`].
    fn ensure(&mut self, n: usize) -> bool {
        while self.cursor + n >= self.limit {
            if self.eof || self.stalled {
                return false;
            }
            let need = self.cursor + n + 1 - self.limit;
            match self.fill(need) {
                Ok(()) => {}
                Err(FillError::Exhausted) => return false,
                Err(err) => {
                    debug!(error = %err, "lexer buffer refill failed");
                    self.stalled = true;
                    self.fatal = Some(err);
                    return false;
                }
            }
        }
        true
    }

    /// End of the real data: `limit` minus the padding once it is in place.
    #[inline]
    fn data_end(&self) -> usize {
        if self.eof {
            self.limit - LOOKAHEAD_PADDING
        } else {
            self.limit
        }
    }

    // ─── Cursor Movement ───

    /// Start a new token at the cursor.
    #[inline]
    pub fn begin_token(&mut self) {
        self.token = self.cursor;
        self.marker = self.cursor;
    }

    /// Move the marker to the cursor.
    #[inline]
    pub fn mark(&mut self) {
        self.marker = self.cursor;
    }

    /// Byte at the cursor, or `0` past the end.
    #[inline]
    pub fn current(&mut self) -> u8 {
        self.peek(0)
    }

    /// Byte `n` positions past the cursor, or `0` past the end.
    #[inline]
    pub fn peek(&mut self, n: usize) -> u8 {
        if self.ensure(n) {
            self.buf[self.cursor + n]
        } else {
            0
        }
    }

    /// Whether `cursor + n` is at or past the real end of input.
    pub fn is_end_at(&mut self, n: usize) -> bool {
        !self.ensure(n) || self.cursor + n >= self.data_end()
    }

    #[inline]
    pub fn is_end(&mut self) -> bool {
        self.is_end_at(0)
    }

    /// Step over the current byte. Has no effect at the end of input.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Step over `n` bytes, stopping at the end of input.
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.is_end() {
                return;
            }
            self.cursor += 1;
        }
    }

    /// Consume bytes while `pred` holds.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.ensure(0) {
            let end = self.data_end();
            if self.cursor >= end {
                break;
            }
            match self.buf[self.cursor..end].iter().position(|&b| !pred(b)) {
                Some(run) => {
                    self.cursor += run;
                    break;
                }
                None => self.cursor = end,
            }
        }
    }

    /// Advance to the next `needle`, leaving the cursor on it.
    ///
    /// Returns `false` if the input ends first, with the cursor at the end.
    pub fn skip_until(&mut self, needle: u8) -> bool {
        self.skip_with(|hay| memchr::memchr(needle, hay)).is_some()
    }

    /// Advance to the next of three needles, leaving the cursor on it.
    ///
    /// Returns the byte found, or `None` if the input ends first.
    pub fn skip_until3(&mut self, a: u8, b: u8, c: u8) -> Option<u8> {
        self.skip_with(|hay| memchr::memchr3(a, b, c, hay))
    }

    fn skip_with(&mut self, find: impl Fn(&[u8]) -> Option<usize>) -> Option<u8> {
        while self.ensure(0) {
            let end = self.data_end();
            if self.cursor >= end {
                return None;
            }
            if let Some(pos) = find(&self.buf[self.cursor..end]) {
                self.cursor += pos;
                return Some(self.buf[self.cursor]);
            }
            self.cursor = end;
        }
        None
    }

    // ─── Views ───

    /// Bytes of the current token, `[token, cursor)`.
    #[inline]
    pub fn token_bytes(&self) -> &[u8] {
        &self.buf[self.token..self.cursor]
    }

    /// Bytes from the marker to the cursor.
    #[inline]
    pub fn marked_bytes(&self) -> &[u8] {
        &self.buf[self.marker..self.cursor]
    }

    /// Absolute source offset of the token start.
    #[inline]
    pub fn token_offset(&self) -> usize {
        self.file_offset + self.token
    }

    /// Absolute source offset of the marker.
    #[inline]
    pub fn marker_offset(&self) -> usize {
        self.file_offset + self.marker
    }

    /// Absolute source offset of the cursor.
    #[inline]
    pub fn cursor_offset(&self) -> usize {
        self.file_offset + self.cursor
    }

    /// Current allocation size.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Take the refill failure that stopped the stream, if any.
    pub fn take_fatal(&mut self) -> Option<FillError> {
        self.fatal.take()
    }

    /// The underlying source, for line reconstruction.
    pub fn source_mut(&mut self) -> &mut Source<'src> {
        &mut self.source
    }
}
