use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wast_ir::{Opcode, ValueType};

fn number_of(text: &str) -> Option<(TokenKind, LiteralType)> {
    match classify(text.as_bytes()) {
        Atom::Number(kind, ty) => Some((kind, ty)),
        _ => None,
    }
}

// === Integers ===

#[test]
fn nats() {
    for text in ["0", "42", "0x0", "0xdeadBEEF", "007"] {
        assert_eq!(number_of(text), Some((TokenKind::Nat, LiteralType::Int)), "{text}");
    }
}

#[test]
fn signed_ints() {
    for text in ["+1", "-0", "-0x7fffffff", "+0xA"] {
        assert_eq!(number_of(text), Some((TokenKind::Int, LiteralType::Int)), "{text}");
    }
}

// === Floats ===

#[test]
fn decimal_floats() {
    for text in ["1.", "1.5", "-0.0", "+3.25", "1e10", "1E-3", "1.5e+7", "12.e4"] {
        assert_eq!(number_of(text), Some((TokenKind::Float, LiteralType::Float)), "{text}");
    }
}

#[test]
fn hex_floats() {
    for text in ["0x1p4", "0x1.8p-1", "-0x1.p+10", "0xa.bp3", "+0x0p0"] {
        assert_eq!(
            number_of(text),
            Some((TokenKind::Float, LiteralType::HexFloat)),
            "{text}"
        );
    }
}

#[test]
fn special_floats() {
    assert_eq!(number_of("inf"), Some((TokenKind::Float, LiteralType::Infinity)));
    assert_eq!(number_of("-infinity"), Some((TokenKind::Float, LiteralType::Infinity)));
    assert_eq!(number_of("nan"), Some((TokenKind::Float, LiteralType::Nan)));
    assert_eq!(number_of("+nan:0x7fc00000"), Some((TokenKind::Float, LiteralType::Nan)));
}

#[test]
fn malformed_numbers_are_unknown() {
    for text in [
        "0x", "1.5.5", ".5", "1e", "1e+", "0x1p", "0x1.8", "nan:0x", "nan:12", "infinit", "--1",
        "+", "1x",
    ] {
        assert_eq!(classify(text.as_bytes()), Atom::Unknown, "{text}");
    }
}

// === Names and memory immediates ===

#[test]
fn vars() {
    assert_eq!(classify(b"$x"), Atom::Var);
    assert_eq!(classify(b"$my_func'2"), Atom::Var);
    assert_eq!(classify(b"$$"), Atom::Var);
    assert_eq!(classify(b"$"), Atom::Unknown);
}

#[test]
fn memory_immediates() {
    assert_eq!(classify(b"offset=16"), Atom::OffsetEq);
    assert_eq!(classify(b"offset=0x10"), Atom::OffsetEq);
    assert_eq!(classify(b"align=4"), Atom::AlignEq);
    assert_eq!(classify(b"offset="), Atom::Unknown);
    assert_eq!(classify(b"align=-4"), Atom::Unknown);
    assert_eq!(classify(b"offset=1x"), Atom::Unknown);
}

// === Precedence ===

#[test]
fn keywords_win_over_numbers_and_names() {
    assert_eq!(
        classify(b"i32"),
        Atom::Keyword(Keyword::Typed(TokenKind::ValueType, ValueType::I32))
    );
    assert_eq!(
        classify(b"i32.add"),
        Atom::Keyword(Keyword::Instruction(TokenKind::Binary, Opcode::I32_ADD))
    );
    assert_eq!(classify(b"offset"), Atom::Keyword(Keyword::Plain(TokenKind::Offset)));
}

#[test]
fn atom_bytes() {
    for byte in b"azAZ09_'+-*/\\^~=<>!?@#$%&|:`.".iter().copied() {
        assert!(is_atom_byte(byte), "{:?}", byte as char);
    }
    for byte in b"()\";, \t\r\n\0[]{}".iter().copied() {
        assert!(!is_atom_byte(byte), "{:?}", byte as char);
    }
    assert!(!is_atom_byte(0x80));
}

proptest! {
    #[test]
    fn decimal_digits_are_nats(text in "[0-9]{1,20}") {
        prop_assert_eq!(number_of(&text), Some((TokenKind::Nat, LiteralType::Int)));
    }

    #[test]
    fn signed_hex_is_int(text in "[+-]0x[0-9a-fA-F]{1,16}") {
        prop_assert_eq!(number_of(&text), Some((TokenKind::Int, LiteralType::Int)));
    }
}
