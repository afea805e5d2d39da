//! The diagnostic record handed to error handlers.

use wast_ir::Location;

/// One source line prepared for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    /// Line text without its terminator, clipped to the requested width.
    /// Clipped sides are marked with `...`.
    pub text: String,
    /// Bytes dropped from the front of the line. Subtract from a column to
    /// position a marker under `text`.
    pub column_offset: usize,
}

/// A lexical error ready to be reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic<'a> {
    pub location: Location<'a>,
    pub message: String,
    /// `None` when the handler asked for no source lines or the line could
    /// not be read back.
    pub source_line: Option<SourceLine>,
}

impl<'a> Diagnostic<'a> {
    pub fn new(location: Location<'a>, message: impl Into<String>) -> Self {
        Diagnostic {
            location,
            message: message.into(),
            source_line: None,
        }
    }

    #[must_use]
    pub fn with_source_line(mut self, source_line: SourceLine) -> Self {
        self.source_line = Some(source_line);
        self
    }
}
