//! The error sink trait and an in-memory implementation.

use crate::{Diagnostic, SourceLine};

/// Source line width handlers ask for unless they say otherwise.
pub const DEFAULT_SOURCE_LINE_MAX_LENGTH: usize = 80;

/// Receives every lexical error.
///
/// The lexer calls [`on_error`](SourceErrorHandler::on_error) once per
/// error, in source order, and keeps going afterwards.
pub trait SourceErrorHandler {
    fn on_error(&mut self, diagnostic: &Diagnostic<'_>);

    /// Widest source line to attach to a diagnostic. `0` means the handler
    /// wants no source lines and the lexer will not read any back.
    fn source_line_max_length(&self) -> usize {
        DEFAULT_SOURCE_LINE_MAX_LENGTH
    }
}

impl<H: SourceErrorHandler + ?Sized> SourceErrorHandler for &mut H {
    fn on_error(&mut self, diagnostic: &Diagnostic<'_>) {
        (**self).on_error(diagnostic);
    }

    fn source_line_max_length(&self) -> usize {
        (**self).source_line_max_length()
    }
}

impl<H: SourceErrorHandler + ?Sized> SourceErrorHandler for Box<H> {
    fn on_error(&mut self, diagnostic: &Diagnostic<'_>) {
        (**self).on_error(diagnostic);
    }

    fn source_line_max_length(&self) -> usize {
        (**self).source_line_max_length()
    }
}

/// An owned copy of a reported [`Diagnostic`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportedError {
    pub filename: String,
    pub line: u32,
    pub first_column: u32,
    pub last_column: u32,
    pub message: String,
    pub source_line: Option<SourceLine>,
}

impl From<&Diagnostic<'_>> for ReportedError {
    fn from(diagnostic: &Diagnostic<'_>) -> Self {
        let location = diagnostic.location;
        ReportedError {
            filename: location.filename.to_owned(),
            line: location.line,
            first_column: location.first_column,
            last_column: location.last_column,
            message: diagnostic.message.clone(),
            source_line: diagnostic.source_line.clone(),
        }
    }
}

/// Keeps every diagnostic it receives.
#[derive(Clone, Debug)]
pub struct CollectingHandler {
    errors: Vec<ReportedError>,
    source_line_max_length: usize,
}

impl CollectingHandler {
    pub fn new() -> Self {
        Self::with_source_line_max_length(DEFAULT_SOURCE_LINE_MAX_LENGTH)
    }

    pub fn with_source_line_max_length(source_line_max_length: usize) -> Self {
        CollectingHandler {
            errors: Vec::new(),
            source_line_max_length,
        }
    }

    pub fn errors(&self) -> &[ReportedError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ReportedError> {
        self.errors
    }

    /// Messages only, in report order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Default for CollectingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceErrorHandler for CollectingHandler {
    fn on_error(&mut self, diagnostic: &Diagnostic<'_>) {
        self.errors.push(ReportedError::from(diagnostic));
    }

    fn source_line_max_length(&self) -> usize {
        self.source_line_max_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wast_ir::Location;

    fn report(handler: &mut impl SourceErrorHandler, message: &str) {
        let location = Location::new("input.wast", 3, 5, 8);
        handler.on_error(&Diagnostic::new(location, message));
    }

    #[test]
    fn collects_in_order() {
        let mut handler = CollectingHandler::new();
        report(&mut handler, "first");
        report(&mut handler, "second");
        assert_eq!(handler.messages(), ["first", "second"]);
        assert_eq!(
            handler.errors()[0],
            ReportedError {
                filename: "input.wast".to_owned(),
                line: 3,
                first_column: 5,
                last_column: 8,
                message: "first".to_owned(),
                source_line: None,
            }
        );
    }

    #[test]
    fn borrowed_handler_forwards() {
        let mut handler = CollectingHandler::with_source_line_max_length(0);
        {
            let mut borrowed = &mut handler;
            assert_eq!(borrowed.source_line_max_length(), 0);
            report(&mut borrowed, "through a reference");
        }
        assert!(handler.has_errors());
        assert_eq!(handler.into_errors().len(), 1);
    }

    #[test]
    fn default_width() {
        assert_eq!(
            CollectingHandler::default().source_line_max_length(),
            DEFAULT_SOURCE_LINE_MAX_LENGTH
        );
    }
}
