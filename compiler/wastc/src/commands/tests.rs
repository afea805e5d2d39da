use std::io::Write;

use super::lex::{dump_tokens, format_token};
use super::opcodes::format_opcode;
use super::*;
use pretty_assertions::assert_eq;
use wast_diagnostic::CollectingHandler;
use wast_ir::Opcode;
use wast_lexer::Lexer;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

// === Options ===

#[test]
fn defaults_without_flags() {
    let options = CliOptions::parse(&args(&["a.wast"])).unwrap();
    assert_eq!(options.handler, HandlerConfig::default());
    assert_eq!(options.positional, ["a.wast"]);
}

#[test]
fn flags_anywhere() {
    let options = CliOptions::parse(&args(&[
        "--color=never",
        "a.wast",
        "--max-line=0",
        "--header=a.wast",
        "7",
    ]))
    .unwrap();
    assert_eq!(options.handler.color, ColorMode::Never);
    assert_eq!(options.handler.source_line_max_length, 0);
    assert_eq!(options.handler.print_header, PrintHeader::Once);
    assert_eq!(options.handler.header, "a.wast");
    assert_eq!(options.positional, ["a.wast", "7"]);
}

#[test]
fn bad_flags_are_rejected() {
    assert_eq!(
        CliOptions::parse(&args(&["--color=sometimes"])),
        Err("unknown color mode 'sometimes'".to_string())
    );
    assert_eq!(
        CliOptions::parse(&args(&["--max-line=wide"])),
        Err("invalid line width 'wide'".to_string())
    );
    assert_eq!(
        CliOptions::parse(&args(&["--verbose"])),
        Err("unknown option '--verbose'".to_string())
    );
}

// === Token dump ===

#[test]
fn token_lines() {
    let mut lexer = Lexer::from_buffer(
        "test.wast",
        b"(i32.const 7)\n$x",
        CollectingHandler::new(),
    );
    assert_eq!(
        dump_tokens(&mut lexer),
        [
            "LPAR @ 1:1-2",
            "CONST i32 @ 1:2-11",
            "NAT Int 7 @ 1:12-13",
            "RPAR @ 1:13-14",
            "VAR $x @ 2:1-3",
            "EOF @ 2:3-3",
        ]
    );
}

#[test]
fn token_line_for_an_instruction() {
    let mut lexer = Lexer::from_buffer("test.wast", b"  f32x4.add", CollectingHandler::new());
    let token = lexer.next_token();
    assert_eq!(format_token(&token), "BINARY f32x4.add @ 1:3-12");
}

#[test]
fn dump_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"(module)\n;; done\n").unwrap();
    let path = file.path().to_str().unwrap().to_owned();

    let mut lexer = Lexer::from_file(&path, CollectingHandler::new()).unwrap();
    let lines = dump_tokens(&mut lexer);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "EOF @ 3:1-1");
    assert!(!lexer.handler().has_errors());
}

// === Opcode dump ===

#[test]
fn opcode_rows() {
    assert_eq!(format_opcode(Opcode::I32_ADD), "0x06a i32.add binary i32 i32 i32 0 0");
    assert_eq!(format_opcode(Opcode::I32_LOAD), "0x028 i32.load load i32 i32 void 4 0");
    assert_eq!(
        format_opcode(Opcode::F32X4_ADD),
        "0x1c7 f32x4.add binary m128 m128 m128 0 4"
    );
}

// === Line query ===

#[test]
fn line_query_on_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"(module\n  (func))\n").unwrap();
    let path = file.path().to_str().unwrap().to_owned();
    let options = CliOptions::default();

    assert!(print_line(&path, 2, &options));
    assert!(!print_line(&path, 9, &options));
    assert!(!print_line("/nonexistent/input.wast", 1, &options));
}
