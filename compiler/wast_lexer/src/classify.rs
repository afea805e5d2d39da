//! Atom classification.
//!
//! Every lexeme other than parentheses, strings and comments is made of
//! atom bytes, so the scanner reads the maximal atom run and classifies it
//! here as a whole. The checks run from most to least specific: keywords,
//! `$names`, `offset=`/`align=`, then the number forms. A run matching
//! none of them is an unknown atom.
//!
//! Number forms:
//!
//! ```text
//! nat       = digit+ | "0x" hexdigit+
//! int       = sign nat
//! float     = sign? num "." digit*
//!           | sign? num ("." digit*)? [eE] sign? num
//! hexfloat  = sign? "0x" hexdigit+ "."? hexdigit* "p" sign? digit+
//! infinity  = sign? ("inf" | "infinity")
//! nan       = sign? "nan" | sign? "nan:0x" hexdigit+
//! ```

use wast_ir::LiteralType;

use crate::keywords::{self, Keyword};
use crate::TokenKind;

/// What an atom run turned out to be.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Atom {
    Keyword(Keyword),
    /// `$` followed by at least one atom byte.
    Var,
    /// `offset=` followed by a nat.
    OffsetEq,
    /// `align=` followed by a nat.
    AlignEq,
    Number(TokenKind, LiteralType),
    Unknown,
}

pub(crate) const OFFSET_EQ: &[u8] = b"offset=";
pub(crate) const ALIGN_EQ: &[u8] = b"align=";

/// Letters, digits, `_`, `'` and the symbol set.
#[inline]
pub(crate) const fn is_atom_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'_' | b'\''
                | b'+'
                | b'-'
                | b'*'
                | b'/'
                | b'\\'
                | b'^'
                | b'~'
                | b'='
                | b'<'
                | b'>'
                | b'!'
                | b'?'
                | b'@'
                | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'|'
                | b':'
                | b'`'
                | b'.'
        )
}

pub(crate) fn classify(atom: &[u8]) -> Atom {
    if let Some(keyword) = keywords::lookup(atom) {
        return Atom::Keyword(keyword);
    }
    if atom.len() > 1 && atom[0] == b'$' {
        return Atom::Var;
    }
    if atom.strip_prefix(OFFSET_EQ).is_some_and(is_nat) {
        return Atom::OffsetEq;
    }
    if atom.strip_prefix(ALIGN_EQ).is_some_and(is_nat) {
        return Atom::AlignEq;
    }
    match number(atom) {
        Some((kind, ty)) => Atom::Number(kind, ty),
        None => Atom::Unknown,
    }
}

fn number(text: &[u8]) -> Option<(TokenKind, LiteralType)> {
    if is_nat(text) {
        return Some((TokenKind::Nat, LiteralType::Int));
    }
    let (signed, body) = strip_sign(text);
    if signed && is_nat(body) {
        return Some((TokenKind::Int, LiteralType::Int));
    }
    let ty = if is_hex_float(body) {
        LiteralType::HexFloat
    } else if is_float(body) {
        LiteralType::Float
    } else if body == b"inf" || body == b"infinity" {
        LiteralType::Infinity
    } else if is_nan(body) {
        LiteralType::Nan
    } else {
        return None;
    };
    Some((TokenKind::Float, ty))
}

// ─── Grammar Pieces ───

fn strip_sign(text: &[u8]) -> (bool, &[u8]) {
    match text.first() {
        Some(b'+' | b'-') => (true, &text[1..]),
        _ => (false, text),
    }
}

/// Length of the leading run matching `pred`.
fn run(text: &[u8], pred: fn(&u8) -> bool) -> usize {
    text.iter().position(|b| !pred(b)).unwrap_or(text.len())
}

/// Non-empty and entirely digits.
fn all_digits(text: &[u8]) -> bool {
    !text.is_empty() && run(text, u8::is_ascii_digit) == text.len()
}

fn is_nat(text: &[u8]) -> bool {
    match text.strip_prefix(b"0x") {
        Some(hex) => !hex.is_empty() && run(hex, u8::is_ascii_hexdigit) == hex.len(),
        None => all_digits(text),
    }
}

/// `[eE]`/`p` already consumed: `sign? digit+` to the end.
fn is_exponent(text: &[u8]) -> bool {
    all_digits(strip_sign(text).1)
}

fn is_float(text: &[u8]) -> bool {
    let int_len = run(text, u8::is_ascii_digit);
    if int_len == 0 {
        return false;
    }
    let mut rest = &text[int_len..];
    let mut has_fraction = false;
    if let Some(after_dot) = rest.strip_prefix(b".") {
        has_fraction = true;
        rest = &after_dot[run(after_dot, u8::is_ascii_digit)..];
    }
    match rest.split_first() {
        None => has_fraction,
        Some((b'e' | b'E', exponent)) => is_exponent(exponent),
        Some(_) => false,
    }
}

fn is_hex_float(text: &[u8]) -> bool {
    let Some(hex) = text.strip_prefix(b"0x") else {
        return false;
    };
    let int_len = run(hex, u8::is_ascii_hexdigit);
    if int_len == 0 {
        return false;
    }
    let mut rest = &hex[int_len..];
    if let Some(after_dot) = rest.strip_prefix(b".") {
        rest = after_dot;
    }
    rest = &rest[run(rest, u8::is_ascii_hexdigit)..];
    match rest.split_first() {
        Some((b'p', exponent)) => is_exponent(exponent),
        _ => false,
    }
}

fn is_nan(text: &[u8]) -> bool {
    if text == b"nan" {
        return true;
    }
    text.strip_prefix(b"nan:0x")
        .is_some_and(|payload| !payload.is_empty() && run(payload, u8::is_ascii_hexdigit) == payload.len())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
