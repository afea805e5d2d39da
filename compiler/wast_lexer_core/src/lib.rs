//! Byte plumbing underneath the WebAssembly text lexer.
//!
//! Two pieces live here:
//!
//! - [`Source`]: one interface over "read from a file" and "read from an
//!   in-memory buffer", used both for streaming refills and for jumping
//!   back to reconstruct a source line for a diagnostic.
//! - [`LexBuffer`]: a growable window over the source with four index
//!   cursors (token start, marker, read cursor, fill limit) that refills
//!   on demand without ever losing the bytes of the token being matched.
//!
//! Nothing in this crate knows about tokens. The scanner in `wast_lexer`
//! drives the buffer byte by byte.

mod lex_buffer;
mod source;

pub use lex_buffer::{FillError, LexBuffer, INITIAL_BUFFER_SIZE, LOOKAHEAD_PADDING};
pub use source::{Source, SourceError, LINE_SCAN_CHUNK};
