//! Error reporting for lexical errors.
//!
//! The lexer never aborts on bad input. It builds a [`Diagnostic`] (the
//! location, the message and, when available, the offending source line
//! clipped for display) and hands it to a [`SourceErrorHandler`]. What
//! happens next is the handler's business:
//!
//! - [`TerminalHandler`] prints a `file:line:col: error: message` header,
//!   the source line, and a `^~~~` marker under the bad columns.
//! - [`CollectingHandler`] keeps owned copies for tools and tests.

mod diagnostic;
mod handler;
mod terminal;

pub use diagnostic::{Diagnostic, SourceLine};
pub use handler::{
    CollectingHandler, ReportedError, SourceErrorHandler, DEFAULT_SOURCE_LINE_MAX_LENGTH,
};
pub use terminal::{ColorMode, HandlerConfig, PrintHeader, TerminalHandler};
