//! Source line reconstruction for diagnostics.
//!
//! Lines are found by scanning the source itself, never the lexer buffer,
//! which only holds the bytes around the current token. The lexer's cursor
//! and, for files, the read position are left as they were.

use wast_diagnostic::{SourceErrorHandler, SourceLine};
use wast_ir::Location;
use wast_lexer_core::SourceError;

use super::Lexer;

const ELLIPSIS: &[u8] = b"...";

impl<H: SourceErrorHandler> Lexer<'_, H> {
    /// The text of `location.line`, at most `max_width` bytes wide
    /// (`0` for no limit).
    ///
    /// A longer line is cut down to a window around the location's columns,
    /// and each clipped side is marked with `...`. `column_offset` is the
    /// number of bytes dropped from the front.
    pub fn get_source_line(
        &mut self,
        location: &Location<'_>,
        max_width: usize,
    ) -> Result<SourceLine, SourceError> {
        let (line_start, line_end) = self.line_bounds(location.line)?;
        let (start, end) = clamp_to_columns(
            line_start,
            line_end,
            location.first_column,
            location.last_column,
            max_width,
        );

        let mut text = self.buffer.source_mut().read_range(start, end - start)?;
        let keep = text.len().min(ELLIPSIS.len());
        if start > line_start {
            text[..keep].copy_from_slice(&ELLIPSIS[..keep]);
        }
        if end < line_end {
            let tail = text.len() - keep;
            text[tail..].copy_from_slice(&ELLIPSIS[..keep]);
        }

        Ok(SourceLine {
            text: String::from_utf8_lossy(&text).into_owned(),
            column_offset: start - line_start,
        })
    }

    /// Absolute `[start, end)` of `line`, terminator excluded.
    fn line_bounds(&mut self, line: u32) -> Result<(usize, usize), SourceError> {
        let (current_line, current_offset) = (self.line, self.line_offset);
        let source = self.buffer.source_mut();
        let start = if line == current_line {
            current_offset
        } else if line == 1 {
            0
        } else if line > current_line {
            source.find_line_start(current_line, current_offset, line)?
        } else {
            source.find_line_start(1, 0, line)?
        };
        let end = source.find_line_end(start)?;
        Ok((start, end))
    }
}

/// Narrow `[line_start, line_end)` to at most `max_width` bytes.
///
/// When the column range fits, the window is centered on it; otherwise it
/// is centered on the first column. The window never runs past the end of
/// the line.
fn clamp_to_columns(
    line_start: usize,
    line_end: usize,
    first_column: u32,
    last_column: u32,
    max_width: usize,
) -> (usize, usize) {
    let len = line_end - line_start;
    if max_width == 0 || len <= max_width {
        return (line_start, line_end);
    }

    let first = first_column as usize;
    let last = last_column as usize;
    let center = if last.saturating_sub(first) > max_width {
        first.saturating_sub(1)
    } else {
        ((first + last) / 2).saturating_sub(1)
    };

    let mut start = line_start;
    if center > max_width / 2 {
        start += center - max_width / 2;
    }
    start = start.min(line_end - max_width);
    (start, start + max_width)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
