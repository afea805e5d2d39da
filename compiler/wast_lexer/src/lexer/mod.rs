//! The lexer handle.
//!
//! A [`Lexer`] owns its [`LexBuffer`] (and through it the source) plus
//! the line bookkeeping every token location is derived from. Columns are
//! byte offsets from the start of the current line, 1-based.

mod scan;
mod source_line;

use tracing::debug;
use wast_diagnostic::{Diagnostic, SourceErrorHandler};
use wast_ir::{ByteSlice, Literal, Location};
use wast_lexer_core::{LexBuffer, Source, SourceError, INITIAL_BUFFER_SIZE};

use crate::{LexErrorKind, Token, TokenValue};
use scan::{Mode, Payload};

/// Lexer settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Size of the first buffer allocation. The buffer doubles from there
    /// whenever a single token outgrows it.
    pub initial_buffer_size: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            initial_buffer_size: INITIAL_BUFFER_SIZE,
        }
    }
}

/// Streaming tokenizer over one source.
///
/// Errors go to `H` as they are found; scanning continues after every
/// error except an unterminated block comment, a string cut off by the
/// end of input, or a failed refill. After those, and after the real end
/// of input, [`next_token`](Lexer::next_token) keeps returning `Eof`.
///
/// Dropping the lexer closes a file source and frees the buffer.
pub struct Lexer<'src, H: SourceErrorHandler> {
    buffer: LexBuffer<'src>,
    filename: &'src str,
    line: u32,
    /// Absolute offset of the first byte of `line`.
    line_offset: usize,
    comment_nesting: u32,
    mode: Mode,
    finished: bool,
    handler: H,
}

impl<'src, H: SourceErrorHandler> Lexer<'src, H> {
    /// Lex the file at `path`. The path doubles as the filename in
    /// locations.
    pub fn from_file(path: &'src str, handler: H) -> Result<Self, SourceError> {
        let source = Source::open(path)?;
        Ok(Self::new(path, source, handler))
    }

    /// Lex bytes the caller keeps alive, reporting locations against
    /// `filename`.
    pub fn from_buffer(filename: &'src str, data: &'src [u8], handler: H) -> Self {
        Self::new(filename, Source::from_bytes(data), handler)
    }

    fn new(filename: &'src str, source: Source<'src>, handler: H) -> Self {
        debug!(filename, file = source.is_file(), "creating lexer");
        Lexer {
            buffer: LexBuffer::new(source),
            filename,
            line: 1,
            line_offset: 0,
            comment_nesting: 0,
            mode: Mode::Normal,
            finished: false,
            handler,
        }
    }

    /// Apply `config`. Only meaningful before the first token is read.
    #[must_use]
    pub fn with_config(mut self, config: LexerConfig) -> Self {
        self.buffer.set_initial_size(config.initial_buffer_size);
        self
    }

    /// Scan the next token.
    ///
    /// Slices in the returned token borrow the lexer's buffer, so they must
    /// be copied out before the next call.
    pub fn next_token(&mut self) -> Token<'_> {
        let scanned = self.scan();
        let location = self.location(self.buffer.token_offset(), self.buffer.cursor_offset());
        let bytes = self.buffer.token_bytes();
        let value = match scanned.payload {
            Payload::None => TokenValue::None,
            Payload::Text => TokenValue::Text(ByteSlice::new(bytes)),
            Payload::TextAfter(prefix) => {
                TokenValue::Text(ByteSlice::new(bytes.get(prefix..).unwrap_or_default()))
            }
            Payload::Literal(ty) => TokenValue::Literal(Literal::new(ty, ByteSlice::new(bytes))),
            Payload::Type(ty) => TokenValue::Type(ty),
            Payload::Opcode(opcode) => TokenValue::Opcode(opcode),
        };
        Token {
            kind: scanned.kind,
            value,
            location,
        }
    }

    // ─── Accessors ───

    pub fn filename(&self) -> &'src str {
        self.filename
    }

    /// Line the scanner is on.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    // ─── Locations ───

    fn location(&self, start: usize, end: usize) -> Location<'src> {
        Location::new(self.filename, self.line, self.column(start), self.column(end))
    }

    fn column(&self, offset: usize) -> u32 {
        u32::try_from(offset.saturating_sub(self.line_offset) + 1).unwrap_or(u32::MAX)
    }

    /// The cursor has just stepped over a `\n`.
    fn newline(&mut self) {
        self.line += 1;
        self.line_offset = self.buffer.cursor_offset();
    }

    // ─── Errors ───

    /// Report an error covering the marker to the cursor. Fatal kinds end
    /// the stream.
    fn report(&mut self, kind: LexErrorKind) {
        let location = self.location(self.buffer.marker_offset(), self.buffer.cursor_offset());
        debug!(%location, error = %kind, fatal = kind.is_fatal(), "lex error");

        let mut diagnostic = Diagnostic::new(location, kind.to_string());
        let max_width = self.handler.source_line_max_length();
        if max_width > 0 {
            match self.get_source_line(&location, max_width) {
                Ok(source_line) => diagnostic = diagnostic.with_source_line(source_line),
                Err(err) => debug!(%location, error = %err, "unable to reconstruct source line"),
            }
        }
        self.handler.on_error(&diagnostic);
        if kind.is_fatal() {
            self.finished = true;
        }
    }
}
