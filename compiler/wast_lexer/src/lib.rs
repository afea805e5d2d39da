//! Streaming lexer for the WebAssembly text format.
//!
//! [`Lexer`] turns a file or an in-memory buffer into [`Token`]s one at a
//! time, reading the source in chunks through a refilling buffer. Tokens
//! carry their kind, a payload (text, numeric literal, value type or
//! opcode) and a [`Location`](wast_ir::Location).
//!
//! Lexical errors are reported through a
//! [`SourceErrorHandler`](wast_diagnostic::SourceErrorHandler) and never
//! abort the scan; the token stream stays well formed around them.
//!
//! ```text
//! (module (func (result i32) (i32.const 1)))
//! LPAR MODULE LPAR FUNC LPAR RESULT VALUE_TYPE(i32) RPAR LPAR CONST(i32)
//! NAT(1) RPAR RPAR RPAR EOF
//! ```

mod classify;
mod keywords;
mod lex_error;
mod lexer;
mod token;

pub use lex_error::LexErrorKind;
pub use lexer::{Lexer, LexerConfig};
pub use token::{Token, TokenKind, TokenValue};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
