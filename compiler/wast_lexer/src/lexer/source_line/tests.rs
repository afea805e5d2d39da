use std::io::Write;

use super::*;
use crate::TokenKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wast_diagnostic::CollectingHandler;

fn lexer(data: &[u8]) -> Lexer<'_, CollectingHandler> {
    Lexer::from_buffer("test.wast", data, CollectingHandler::new())
}

fn drain<H: SourceErrorHandler>(lexer: &mut Lexer<'_, H>) {
    while !lexer.next_token().is_eof() {}
}

/// `(module`, a 200-byte second line, `)`.
fn long_line_source() -> (Vec<u8>, Vec<u8>) {
    let line2: Vec<u8> = (0..200u8).map(|i| b'a' + i % 26).collect();
    let mut data = b"(module\n".to_vec();
    data.extend_from_slice(&line2);
    data.extend_from_slice(b"\n)");
    (data, line2)
}

fn at(line: u32, first_column: u32, last_column: u32) -> Location<'static> {
    Location::new("test.wast", line, first_column, last_column)
}

// === Window placement ===

#[test]
fn short_lines_are_untouched() {
    assert_eq!(clamp_to_columns(10, 50, 5, 9, 80), (10, 50));
    assert_eq!(clamp_to_columns(10, 90, 5, 9, 80), (10, 90));
}

#[test]
fn zero_width_means_unlimited() {
    assert_eq!(clamp_to_columns(0, 1000, 500, 510, 0), (0, 1000));
}

#[test]
fn window_centers_on_the_range() {
    // center = (100 + 105) / 2 - 1 = 101, start = 101 - 40
    assert_eq!(clamp_to_columns(0, 200, 100, 105, 80), (61, 141));
}

#[test]
fn window_stays_at_the_front() {
    assert_eq!(clamp_to_columns(0, 200, 1, 2, 80), (0, 80));
}

#[test]
fn window_stops_at_the_end() {
    assert_eq!(clamp_to_columns(0, 200, 195, 199, 80), (120, 200));
}

#[test]
fn wide_range_anchors_on_first_column() {
    // center = 50 - 1, start = 49 - 5
    assert_eq!(clamp_to_columns(0, 200, 50, 150, 10), (44, 54));
}

// === Reconstruction ===

#[test]
fn clipped_middle_has_both_markers() {
    let (data, line2) = long_line_source();
    let mut lexer = lexer(&data);
    let line = lexer.get_source_line(&at(2, 100, 105), 80).unwrap();
    assert_eq!(line.text.len(), 80);
    assert_eq!(line.column_offset, 61);
    assert!(line.text.starts_with("..."));
    assert!(line.text.ends_with("..."));
    assert_eq!(line.text.as_bytes()[3..77], line2[64..138]);
}

#[test]
fn clipped_tail_only() {
    let (data, line2) = long_line_source();
    let mut lexer = lexer(&data);
    let line = lexer.get_source_line(&at(2, 1, 2), 80).unwrap();
    assert_eq!(line.column_offset, 0);
    assert!(!line.text.starts_with("..."));
    assert!(line.text.ends_with("..."));
    assert_eq!(line.text.as_bytes()[..77], line2[..77]);
}

#[test]
fn clipped_head_only() {
    let (data, line2) = long_line_source();
    let mut lexer = lexer(&data);
    let line = lexer.get_source_line(&at(2, 195, 199), 80).unwrap();
    assert_eq!(line.column_offset, 120);
    assert!(line.text.starts_with("..."));
    assert_eq!(line.text.as_bytes()[3..], line2[123..]);
}

#[test]
fn lines_before_and_after_the_cursor() {
    let (data, line2) = long_line_source();
    let mut lexer = lexer(&data);
    assert_eq!(lexer.get_source_line(&at(3, 1, 2), 80).unwrap().text, ")");

    drain(&mut lexer);
    assert_eq!(lexer.line(), 3);
    assert_eq!(lexer.get_source_line(&at(1, 1, 2), 80).unwrap().text, "(module");
    let full = lexer.get_source_line(&at(2, 1, 2), 0).unwrap();
    assert_eq!(full.text.as_bytes(), line2.as_slice());
    assert_eq!(lexer.get_source_line(&at(3, 1, 2), 80).unwrap().text, ")");
}

#[test]
fn missing_lines_are_errors() {
    let (data, _) = long_line_source();
    let mut lexer = lexer(&data);
    assert!(matches!(
        lexer.get_source_line(&at(4, 1, 1), 80),
        Err(SourceError::LineOutOfRange { line: 4 })
    ));
    assert!(matches!(
        lexer.get_source_line(&at(0, 1, 1), 80),
        Err(SourceError::LineOutOfRange { line: 0 })
    ));
}

#[test]
fn carriage_returns_are_dropped() {
    let mut lexer = lexer(b"(a\r\n(bb\r\n");
    assert_eq!(lexer.get_source_line(&at(1, 1, 2), 80).unwrap().text, "(a");
    assert_eq!(lexer.get_source_line(&at(2, 1, 2), 80).unwrap().text, "(bb");
}

#[test]
fn tiny_window_overlaps_markers() {
    let mut lexer = lexer(b"abcdefghij");
    let line = lexer.get_source_line(&at(1, 5, 6), 2).unwrap();
    assert_eq!(line.text, "..");
    assert_eq!(line.column_offset, 3);
}

#[test]
fn file_lookups_leave_the_scan_alone() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"(module\n  (func)\n  (memory 1))\n").unwrap();
    let path = file.path().to_str().unwrap().to_owned();

    let mut lexer = Lexer::from_file(&path, CollectingHandler::new()).unwrap();
    assert_eq!(lexer.next_token().kind, TokenKind::Lpar);
    assert_eq!(lexer.next_token().kind, TokenKind::Module);
    assert_eq!(lexer.get_source_line(&at(3, 3, 4), 80).unwrap().text, "  (memory 1))");
    assert_eq!(lexer.get_source_line(&at(1, 1, 2), 80).unwrap().text, "(module");

    let mut kinds = Vec::new();
    loop {
        let token = lexer.next_token();
        if token.is_eof() {
            break;
        }
        kinds.push(token.kind);
    }
    assert_eq!(
        kinds,
        [
            TokenKind::Lpar,
            TokenKind::Func,
            TokenKind::Rpar,
            TokenKind::Lpar,
            TokenKind::Memory,
            TokenKind::Nat,
            TokenKind::Rpar,
            TokenKind::Rpar,
        ]
    );
    assert!(!lexer.handler().has_errors());
}

proptest! {
    #[test]
    fn window_respects_the_width(
        len in 1usize..400,
        first in 1u32..420,
        span in 0u32..120,
        max_width in 8usize..100,
    ) {
        let mut data = b"x\n".to_vec();
        data.extend(std::iter::repeat(b'w').take(len));
        data.push(b'\n');
        let mut lexer = lexer(&data);

        let line = lexer.get_source_line(&at(2, first, first + span), max_width).unwrap();
        prop_assert_eq!(line.text.len(), len.min(max_width));
        prop_assert!(line.column_offset + line.text.len() <= len);
        prop_assert_eq!(line.text.starts_with("..."), line.column_offset > 0);
    }
}
