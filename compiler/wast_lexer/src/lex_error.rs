//! Lexical error kinds.
//!
//! Each error is rendered to its message through `Display` and handed to
//! the lexer's [`SourceErrorHandler`](wast_diagnostic::SourceErrorHandler)
//! together with its location. Most errors are skipped over; the fatal
//! kinds end the token stream, and the lexer returns only `Eof` after them.

use std::fmt;

/// What went wrong at a given location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    // === Normal mode ===
    /// A byte that cannot start any lexeme.
    UnexpectedChar,
    /// An atom run that matches no keyword, name or number.
    UnexpectedToken { text: String },

    // === Strings ===
    /// Raw line break inside a string. The string is abandoned.
    NewlineInString,
    /// Backslash followed by something other than a valid escape.
    BadEscape { text: String },
    /// Control byte, DEL, or a backslash at a line break or the end.
    IllegalCharInString,
    /// Input ended inside a string.
    UnexpectedEofInString,

    // === Comments ===
    UnterminatedBlockComment,

    // === Buffer ===
    /// The buffer could not grow to hold the current token.
    BufferAllocation,
    /// Reading more input failed.
    SourceRead { reason: String },
}

impl LexErrorKind {
    /// Whether the lexer stops after reporting this error.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LexErrorKind::UnexpectedEofInString
                | LexErrorKind::UnterminatedBlockComment
                | LexErrorKind::BufferAllocation
                | LexErrorKind::SourceRead { .. }
        )
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnexpectedChar => f.write_str("unexpected char"),
            LexErrorKind::UnexpectedToken { text } => write!(f, "unexpected token \"{text}\""),
            LexErrorKind::NewlineInString => f.write_str("newline in string"),
            LexErrorKind::BadEscape { text } => write!(f, "bad escape \"{text}\""),
            LexErrorKind::IllegalCharInString => f.write_str("illegal character in string"),
            LexErrorKind::UnexpectedEofInString => f.write_str("unexpected EOF"),
            LexErrorKind::UnterminatedBlockComment => f.write_str("unterminated block comment"),
            LexErrorKind::BufferAllocation => f.write_str("unable to reallocate lexer buffer"),
            LexErrorKind::SourceRead { reason } => write!(f, "unable to read source: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests;
