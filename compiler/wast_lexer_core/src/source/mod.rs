//! File- or memory-backed input.
//!
//! The lexer reads a [`Source`] sequentially through [`Source::read`].
//! Diagnostics additionally need to find and copy out arbitrary lines;
//! those scans go through the same handle, so for files they save the
//! stream position first and put it back afterwards, whether or not the
//! scan succeeded. A scan for a diagnostic never disturbs the next refill.


use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Bytes read per step when scanning a file for line boundaries.
pub const LINE_SCAN_CHUNK: usize = 8 * 1024;

/// Failure while opening a source or reconstructing one of its lines.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unable to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line} is past the end of the source")]
    LineOutOfRange { line: u32 },
    #[error("bytes {start}..{end} are past the end of the source")]
    RangeOutOfBounds { start: usize, end: usize },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Input for one lexer.
///
/// A file source owns its handle and closes it on drop. A buffer source
/// borrows the caller's bytes and never copies them wholesale.
#[derive(Debug)]
pub struct Source<'src> {
    kind: SourceKind<'src>,
}

#[derive(Debug)]
enum SourceKind<'src> {
    File { file: File, path: PathBuf },
    Buffer { data: &'src [u8], read_offset: usize },
}

/// Outcome of a forward scan.
enum Scan {
    /// The visitor stopped at this absolute offset.
    Found(usize),
    /// The source ran out; the payload is its total length.
    Exhausted(usize),
}

impl<'src> Source<'src> {
    /// Open `path` for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Source {
            kind: SourceKind::File {
                file,
                path: path.to_path_buf(),
            },
        })
    }

    /// Read from memory the caller keeps alive.
    pub fn from_bytes(data: &'src [u8]) -> Self {
        Source {
            kind: SourceKind::Buffer {
                data,
                read_offset: 0,
            },
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, SourceKind::File { .. })
    }

    /// Path of a file source.
    pub fn path(&self) -> Option<&Path> {
        match &self.kind {
            SourceKind::File { path, .. } => Some(path),
            SourceKind::Buffer { .. } => None,
        }
    }

    /// Fill as much of `out` as the source can supply.
    ///
    /// Returns the number of bytes written. Anything short of `out.len()`
    /// means the source is exhausted.
    pub fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        match &mut self.kind {
            SourceKind::File { file, .. } => {
                let mut filled = 0;
                while filled < out.len() {
                    match file.read(&mut out[filled..]) {
                        Ok(0) => break,
                        Ok(n) => filled += n,
                        Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                        Err(err) => return Err(err),
                    }
                }
                Ok(filled)
            }
            SourceKind::Buffer { data, read_offset } => {
                let remaining = &data[*read_offset..];
                let n = remaining.len().min(out.len());
                out[..n].copy_from_slice(&remaining[..n]);
                *read_offset += n;
                Ok(n)
            }
        }
    }

    /// Absolute offset where `target_line` begins, scanning forward from an
    /// anchor whose line number and start offset are known.
    pub fn find_line_start(
        &mut self,
        anchor_line: u32,
        anchor_offset: usize,
        target_line: u32,
    ) -> Result<usize, SourceError> {
        if target_line < anchor_line || target_line == 0 {
            return Err(SourceError::LineOutOfRange { line: target_line });
        }
        if target_line == anchor_line {
            return Ok(anchor_offset);
        }

        let mut line = anchor_line;
        let scan = self.scan_forward(anchor_offset, |base, chunk| {
            for pos in memchr::memchr_iter(b'\n', chunk) {
                line += 1;
                if line == target_line {
                    return ControlFlow::Break(base + pos + 1);
                }
            }
            ControlFlow::Continue(())
        })?;

        match scan {
            Scan::Found(start) => Ok(start),
            Scan::Exhausted(_) => Err(SourceError::LineOutOfRange { line: target_line }),
        }
    }

    /// Absolute offset where the line starting at `line_start` ends: the next
    /// `\n` (less a preceding `\r`) or the end of the source.
    pub fn find_line_end(&mut self, line_start: usize) -> Result<usize, SourceError> {
        let mut previous = None;
        let scan = self.scan_forward(line_start, |base, chunk| {
            if let Some(pos) = memchr::memchr(b'\n', chunk) {
                let before = if pos > 0 { Some(chunk[pos - 1]) } else { previous };
                let end = base + pos;
                return ControlFlow::Break(if before == Some(b'\r') && end > line_start {
                    end - 1
                } else {
                    end
                });
            }
            previous = chunk.last().copied();
            ControlFlow::Continue(())
        })?;

        Ok(match scan {
            Scan::Found(end) | Scan::Exhausted(end) => end,
        })
    }

    /// Copy `len` bytes starting at absolute offset `start`.
    pub fn read_range(&mut self, start: usize, len: usize) -> Result<Vec<u8>, SourceError> {
        let end = start.saturating_add(len);
        match &mut self.kind {
            SourceKind::Buffer { data, .. } => data
                .get(start..end)
                .map(<[u8]>::to_vec)
                .ok_or(SourceError::RangeOutOfBounds { start, end }),
            SourceKind::File { file, .. } => with_restored_position(file, |file| {
                file.seek(SeekFrom::Start(start as u64))?;
                let mut bytes = vec![0; len];
                file.read_exact(&mut bytes).map_err(|err| {
                    if err.kind() == io::ErrorKind::UnexpectedEof {
                        SourceError::RangeOutOfBounds { start, end }
                    } else {
                        SourceError::Io(err)
                    }
                })?;
                Ok(bytes)
            }),
        }
    }

    /// Walk the source from absolute offset `from`, handing the visitor
    /// each chunk with the absolute offset of its first byte.
    fn scan_forward(
        &mut self,
        from: usize,
        mut visit: impl FnMut(usize, &[u8]) -> ControlFlow<usize>,
    ) -> Result<Scan, SourceError> {
        match &mut self.kind {
            SourceKind::Buffer { data, .. } => {
                let start = from.min(data.len());
                Ok(match visit(start, &data[start..]) {
                    ControlFlow::Break(found) => Scan::Found(found),
                    ControlFlow::Continue(()) => Scan::Exhausted(data.len()),
                })
            }
            SourceKind::File { file, .. } => with_restored_position(file, |file| {
                file.seek(SeekFrom::Start(from as u64))?;
                let mut chunk = [0u8; LINE_SCAN_CHUNK];
                let mut base = from;
                loop {
                    let n = match file.read(&mut chunk) {
                        Ok(0) => return Ok(Scan::Exhausted(base)),
                        Ok(n) => n,
                        Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                        Err(err) => return Err(err.into()),
                    };
                    if let ControlFlow::Break(found) = visit(base, &chunk[..n]) {
                        return Ok(Scan::Found(found));
                    }
                    base += n;
                }
            }),
        }
    }
}

/// Run `scan` against `file`, then seek back to where the file was.
///
/// The position is restored on every path. If restoring itself fails that
/// error wins, since the caller can no longer trust the handle.
fn with_restored_position<T>(
    file: &mut File,
    scan: impl FnOnce(&mut File) -> Result<T, SourceError>,
) -> Result<T, SourceError> {
    let saved = file.stream_position()?;
    let result = scan(file);
    file.seek(SeekFrom::Start(saved))?;
    result
}
