//! Mode-conditioned scanning.
//!
//! Each step consumes one lexeme (or one sub-lexeme of a bad string) in
//! the current mode and returns the next mode, plus a token if the step
//! produced one:
//!
//! | Mode         | Consumes                                     |
//! |--------------|----------------------------------------------|
//! | Normal       | parens, atoms, strings, whitespace, openers  |
//! | BadText      | the rest of a string holding invalid content |
//! | LineComment  | up to and including the next `\n`            |
//! | BlockComment | nested `(; ... ;)` up to the matching close  |
//!
//! The token start moves to the cursor at every step, except in bad-text
//! mode where it stays on the opening quote so the recovered string comes
//! back whole. The marker always moves, so errors point at the piece that
//! was wrong.

use tracing::trace;
use wast_diagnostic::SourceErrorHandler;
use wast_ir::{LiteralType, Opcode, ValueType};
use wast_lexer_core::FillError;

use super::Lexer;
use crate::classify::{self, Atom, ALIGN_EQ, OFFSET_EQ};
use crate::keywords::Keyword;
use crate::{LexErrorKind, TokenKind};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Mode {
    Normal,
    BadText,
    LineComment,
    BlockComment,
}

/// How to build a token's value from its bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Payload {
    None,
    Text,
    /// Text after a fixed prefix.
    TextAfter(usize),
    Literal(LiteralType),
    Type(ValueType),
    Opcode(Opcode),
}

/// A token whose bytes are `[token, cursor)` in the buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) struct Scanned {
    pub(super) kind: TokenKind,
    pub(super) payload: Payload,
}

impl Scanned {
    const EOF: Scanned = Scanned::plain(TokenKind::Eof);

    const fn plain(kind: TokenKind) -> Self {
        Scanned {
            kind,
            payload: Payload::None,
        }
    }

    const fn with(kind: TokenKind, payload: Payload) -> Self {
        Scanned { kind, payload }
    }
}

type Step = (Mode, Option<Scanned>);

/// Bytes that stand for themselves inside a string.
#[inline]
fn is_plain_string_byte(byte: u8) -> bool {
    byte >= 0x20 && byte != 0x7f && byte != b'"' && byte != b'\\'
}

impl<H: SourceErrorHandler> Lexer<'_, H> {
    pub(super) fn scan(&mut self) -> Scanned {
        loop {
            if self.finished {
                return self.eof();
            }
            if self.mode != Mode::BadText {
                self.buffer.begin_token();
            }
            self.buffer.mark();

            let (mode, scanned) = match self.mode {
                Mode::Normal => self.scan_normal(),
                Mode::BadText => self.scan_bad_text(),
                Mode::LineComment => self.scan_line_comment(),
                Mode::BlockComment => self.scan_block_comment(),
            };
            if mode != self.mode {
                trace!(from = ?self.mode, to = ?mode, line = self.line, "mode change");
                self.mode = mode;
            }

            if self.stop_on_fatal() {
                return self.eof();
            }
            if let Some(scanned) = scanned {
                return scanned;
            }
        }
    }

    /// An empty `Eof` token at the cursor.
    fn eof(&mut self) -> Scanned {
        self.buffer.begin_token();
        Scanned::EOF
    }

    /// Report a refill failure parked by the buffer, if there is one.
    fn stop_on_fatal(&mut self) -> bool {
        let kind = match self.buffer.take_fatal() {
            None | Some(FillError::Exhausted) => return false,
            Some(FillError::OutOfMemory(_) | FillError::CapacityOverflow) => {
                LexErrorKind::BufferAllocation
            }
            Some(FillError::Read(err)) => LexErrorKind::SourceRead {
                reason: err.to_string(),
            },
        };
        self.report(kind);
        true
    }

    // ─── Normal ───

    fn scan_normal(&mut self) -> Step {
        let byte = self.buffer.current();
        match byte {
            0 if self.buffer.is_end() => (Mode::Normal, Some(Scanned::EOF)),
            b'(' if self.buffer.peek(1) == b';' => {
                self.buffer.advance_n(2);
                self.comment_nesting = 1;
                (Mode::BlockComment, None)
            }
            b'(' => self.single(TokenKind::Lpar),
            b')' => self.single(TokenKind::Rpar),
            b';' if self.buffer.peek(1) == b';' => {
                self.buffer.advance_n(2);
                (Mode::LineComment, None)
            }
            b'"' => self.scan_text(),
            b' ' | b'\t' | b'\r' => {
                self.buffer
                    .eat_while(|b| matches!(b, b' ' | b'\t' | b'\r'));
                (Mode::Normal, None)
            }
            b'\n' => {
                self.buffer.advance();
                self.newline();
                (Mode::Normal, None)
            }
            _ if classify::is_atom_byte(byte) => (Mode::Normal, self.scan_atom()),
            _ => {
                self.buffer.advance();
                self.report(LexErrorKind::UnexpectedChar);
                (Mode::Normal, None)
            }
        }
    }

    fn single(&mut self, kind: TokenKind) -> Step {
        self.buffer.advance();
        (Mode::Normal, Some(Scanned::plain(kind)))
    }

    /// Read the maximal atom run and classify it.
    fn scan_atom(&mut self) -> Option<Scanned> {
        self.buffer.eat_while(classify::is_atom_byte);
        let scanned = match classify::classify(self.buffer.token_bytes()) {
            Atom::Keyword(Keyword::Plain(kind)) => Scanned::plain(kind),
            Atom::Keyword(Keyword::Typed(kind, ty)) => Scanned::with(kind, Payload::Type(ty)),
            Atom::Keyword(Keyword::Instruction(kind, opcode)) => {
                Scanned::with(kind, Payload::Opcode(opcode))
            }
            Atom::Var => Scanned::with(TokenKind::Var, Payload::Text),
            Atom::OffsetEq => {
                Scanned::with(TokenKind::OffsetEqNat, Payload::TextAfter(OFFSET_EQ.len()))
            }
            Atom::AlignEq => {
                Scanned::with(TokenKind::AlignEqNat, Payload::TextAfter(ALIGN_EQ.len()))
            }
            Atom::Number(kind, ty) => Scanned::with(kind, Payload::Literal(ty)),
            Atom::Unknown => {
                let text = String::from_utf8_lossy(self.buffer.token_bytes()).into_owned();
                self.report(LexErrorKind::UnexpectedToken { text });
                return None;
            }
        };
        Some(scanned)
    }

    /// A string with valid content comes back in one step. The first
    /// invalid byte hands over to bad-text mode without consuming it.
    fn scan_text(&mut self) -> Step {
        self.buffer.advance();
        loop {
            self.buffer.eat_while(is_plain_string_byte);
            match self.buffer.current() {
                b'"' => {
                    self.buffer.advance();
                    return (Mode::Normal, Some(Scanned::with(TokenKind::Text, Payload::Text)));
                }
                b'\\' => match self.escape_len() {
                    0 => return (Mode::BadText, None),
                    len => self.buffer.advance_n(len),
                },
                _ => return (Mode::BadText, None),
            }
        }
    }

    /// Length of the valid escape starting at the cursor's `\`, or 0.
    fn escape_len(&mut self) -> usize {
        match self.buffer.peek(1) {
            b'n' | b't' | b'\\' | b'\'' | b'"' => 2,
            first if first.is_ascii_hexdigit() && self.buffer.peek(2).is_ascii_hexdigit() => 3,
            _ => 0,
        }
    }

    // ─── Bad Text ───

    fn scan_bad_text(&mut self) -> Step {
        let byte = self.buffer.current();
        match byte {
            0 if self.buffer.is_end() => {
                self.report(LexErrorKind::UnexpectedEofInString);
                (Mode::Normal, Some(self.eof()))
            }
            b'"' => {
                self.buffer.advance();
                (Mode::Normal, Some(Scanned::with(TokenKind::Text, Payload::Text)))
            }
            b'\n' => {
                self.buffer.advance();
                self.report(LexErrorKind::NewlineInString);
                self.newline();
                (Mode::Normal, None)
            }
            b'\\' => {
                match self.escape_len() {
                    0 if self.buffer.peek(1) == b'\n' || self.buffer.is_end_at(1) => {
                        self.buffer.advance();
                        self.report(LexErrorKind::IllegalCharInString);
                    }
                    0 => {
                        self.buffer.advance_n(2);
                        let text = String::from_utf8_lossy(self.buffer.marked_bytes()).into_owned();
                        self.report(LexErrorKind::BadEscape { text });
                    }
                    len => self.buffer.advance_n(len),
                }
                (Mode::BadText, None)
            }
            _ if is_plain_string_byte(byte) => {
                self.buffer.eat_while(is_plain_string_byte);
                (Mode::BadText, None)
            }
            _ => {
                self.buffer.advance();
                self.report(LexErrorKind::IllegalCharInString);
                (Mode::BadText, None)
            }
        }
    }

    // ─── Comments ───

    fn scan_line_comment(&mut self) -> Step {
        if self.buffer.skip_until(b'\n') {
            self.buffer.advance();
            self.newline();
            (Mode::Normal, None)
        } else {
            (Mode::LineComment, Some(self.eof()))
        }
    }

    fn scan_block_comment(&mut self) -> Step {
        match self.buffer.skip_until3(b'(', b';', b'\n') {
            None => {
                self.report(LexErrorKind::UnterminatedBlockComment);
                (Mode::BlockComment, Some(self.eof()))
            }
            Some(b'\n') => {
                self.buffer.advance();
                self.newline();
                (Mode::BlockComment, None)
            }
            Some(b'(') => {
                if self.buffer.peek(1) == b';' {
                    self.buffer.advance_n(2);
                    self.comment_nesting += 1;
                } else {
                    self.buffer.advance();
                }
                (Mode::BlockComment, None)
            }
            Some(_) => {
                if self.buffer.peek(1) == b')' {
                    self.buffer.advance_n(2);
                    self.comment_nesting = self.comment_nesting.saturating_sub(1);
                    if self.comment_nesting == 0 {
                        return (Mode::Normal, None);
                    }
                } else {
                    self.buffer.advance();
                }
                (Mode::BlockComment, None)
            }
        }
    }
}
