//! End-to-end lexer tests.

use std::io::Write;

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wast_diagnostic::{
    CollectingHandler, ColorMode, HandlerConfig, SourceErrorHandler, TerminalHandler,
};
use wast_ir::{LiteralType, Opcode, ValueType};
use wast_lexer_core::SourceError;

/// An owned copy of a token.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Lexed {
    kind: TokenKind,
    value: String,
    line: u32,
    columns: (u32, u32),
}

impl From<&Token<'_>> for Lexed {
    fn from(token: &Token<'_>) -> Self {
        Lexed {
            kind: token.kind,
            value: token.value.to_string(),
            line: token.location.line,
            columns: (token.location.first_column, token.location.last_column),
        }
    }
}

/// Every token up to and including the first `Eof`.
fn lex_all<H: SourceErrorHandler>(lexer: &mut Lexer<'_, H>) -> Vec<Lexed> {
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(Lexed::from(&token));
        if done {
            return tokens;
        }
    }
}

fn lex_with(source: &[u8], config: LexerConfig) -> (Vec<Lexed>, Vec<String>) {
    let mut lexer =
        Lexer::from_buffer("test.wast", source, CollectingHandler::new()).with_config(config);
    let tokens = lex_all(&mut lexer);
    let messages = lexer
        .handler()
        .messages()
        .into_iter()
        .map(str::to_owned)
        .collect();
    (tokens, messages)
}

fn lex(source: &str) -> (Vec<Lexed>, Vec<String>) {
    lex_with(source.as_bytes(), LexerConfig::default())
}

fn kinds(tokens: &[Lexed]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

// === Token sequences ===

#[test]
fn module_with_one_function() {
    use TokenKind as K;

    let source = "(module (func (param i32) (result i32) (i32.add (get_local 0) (i32.const 1))))";
    let mut lexer = Lexer::from_buffer("test.wast", source.as_bytes(), CollectingHandler::new());

    let mut seen = Vec::new();
    loop {
        let token = lexer.next_token();
        match token.kind {
            K::ValueType => assert_eq!(token.value_type(), Some(ValueType::I32)),
            K::Binary => assert_eq!(token.opcode(), Some(Opcode::I32_ADD)),
            K::GetLocal => assert_eq!(token.opcode(), Some(Opcode::GET_LOCAL)),
            K::Const => {
                assert_eq!(token.value, TokenValue::Type(ValueType::I32));
                assert_eq!(token.opcode(), Some(Opcode::I32_CONST));
            }
            K::Nat => assert_eq!(token.literal().map(|l| l.ty), Some(LiteralType::Int)),
            _ => {}
        }
        seen.push(Lexed::from(&token));
        if token.is_eof() {
            break;
        }
    }

    assert_eq!(
        kinds(&seen),
        [
            K::Lpar, K::Module, K::Lpar, K::Func, K::Lpar, K::Param, K::ValueType, K::Rpar,
            K::Lpar, K::Result, K::ValueType, K::Rpar, K::Lpar, K::Binary, K::Lpar, K::GetLocal,
            K::Nat, K::Rpar, K::Lpar, K::Const, K::Nat, K::Rpar, K::Rpar, K::Rpar, K::Rpar,
            K::Eof,
        ]
    );
    let nats: Vec<&str> = seen
        .iter()
        .filter(|t| t.kind == K::Nat)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(nats, ["Int 0", "Int 1"]);
    assert!(!lexer.handler().has_errors());
}

#[test]
fn locations_follow_lines_and_columns() {
    let (tokens, errors) = lex("(module\n  (func))");
    assert!(errors.is_empty());
    let spans: Vec<(u32, (u32, u32))> = tokens.iter().map(|t| (t.line, t.columns)).collect();
    assert_eq!(
        spans,
        [(1, (1, 2)), (1, (2, 8)), (2, (3, 4)), (2, (4, 8)), (2, (8, 9)), (2, (9, 10)), (2, (10, 10))]
    );
}

#[test]
fn crlf_line_endings() {
    let (tokens, errors) = lex("(module\r\n)");
    assert!(errors.is_empty());
    assert_eq!(tokens[2].kind, TokenKind::Rpar);
    assert_eq!((tokens[2].line, tokens[2].columns), (2, (1, 2)));
}

#[test]
fn eof_repeats() {
    let mut lexer = Lexer::from_buffer("test.wast", b"()", CollectingHandler::new());
    assert_eq!(lexer.next_token().kind, TokenKind::Lpar);
    assert_eq!(lexer.next_token().kind, TokenKind::Rpar);
    for _ in 0..3 {
        assert!(lexer.next_token().is_eof());
    }
}

#[test]
fn every_mnemonic_round_trips() {
    for opcode in Opcode::iter() {
        let mut lexer =
            Lexer::from_buffer("test.wast", opcode.name().as_bytes(), CollectingHandler::new());
        let token = lexer.next_token();
        assert_eq!(token.opcode(), Some(opcode), "{}", opcode.name());
        assert_eq!(token.location.width(), u32::try_from(opcode.name().len()).unwrap());
        assert!(lexer.next_token().is_eof());
        assert!(!lexer.handler().has_errors(), "{}", opcode.name());
    }
}

#[test]
fn if_else_alias() {
    let (tokens, _) = lex("if_else if");
    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[0].value, tokens[1].value);
}

#[test]
fn vector_shapes_and_simd_instructions() {
    let (tokens, errors) = lex("i32x4 b16x8 f32x4.const i8x16.build b64x2.const");
    assert!(errors.is_empty());
    assert_eq!(tokens[0].value, ValueType::M128.to_string());
    assert_eq!(tokens[1].value, ValueType::B8.to_string());
    assert_eq!(
        kinds(&tokens[2..]),
        [TokenKind::SimdConst, TokenKind::SimdBuild, TokenKind::SimdConst, TokenKind::Eof]
    );
    assert_eq!(tokens[4].value, "b64x2.const");
}

// === Literals and immediates ===

#[test]
fn numeric_literals() {
    let (tokens, errors) = lex("1 -2 3.5 0x1p3 inf -nan:0x1 +0xff");
    assert!(errors.is_empty());
    let values: Vec<(TokenKind, &str)> = tokens
        .iter()
        .map(|t| (t.kind, t.value.as_str()))
        .collect();
    assert_eq!(
        values,
        [
            (TokenKind::Nat, "Int 1"),
            (TokenKind::Int, "Int -2"),
            (TokenKind::Float, "Float 3.5"),
            (TokenKind::Float, "HexFloat 0x1p3"),
            (TokenKind::Float, "Infinity inf"),
            (TokenKind::Float, "Nan -nan:0x1"),
            (TokenKind::Int, "Int +0xff"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn memory_immediates_drop_their_prefix() {
    let mut lexer = Lexer::from_buffer(
        "test.wast",
        b"i64.load8_s offset=16 align=0x1",
        CollectingHandler::new(),
    );
    let load = lexer.next_token();
    assert_eq!((load.kind, load.opcode()), (TokenKind::Load, Some(Opcode::I64_LOAD8_S)));

    let offset = lexer.next_token();
    assert_eq!(offset.kind, TokenKind::OffsetEqNat);
    assert!(offset.text().is_some_and(|t| t.eq_str("16")));
    assert_eq!((offset.location.first_column, offset.location.last_column), (13, 22));

    let align = lexer.next_token();
    assert_eq!(align.kind, TokenKind::AlignEqNat);
    assert!(align.text().is_some_and(|t| t.eq_str("0x1")));
}

#[test]
fn names_and_strings() {
    let (tokens, errors) = lex(r#"$f "it\'s \"quoted\"\n\7f""#);
    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[0].value, "$f");
    assert_eq!(tokens[1].kind, TokenKind::Text);
    assert_eq!(tokens[1].value, r#""it\'s \"quoted\"\n\7f""#);
}

// === Comments ===

#[test]
fn line_comments() {
    let (tokens, errors) = lex(";; header\n(module) ;; trailing");
    assert!(errors.is_empty());
    assert_eq!(
        kinds(&tokens),
        [TokenKind::Lpar, TokenKind::Module, TokenKind::Rpar, TokenKind::Eof]
    );
    assert_eq!(tokens[0].line, 2);
}

#[test]
fn nested_block_comments_are_skipped() {
    let (tokens, errors) = lex("(; one (; two (; three ;) ;)\n still ;) (module)");
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(
        kinds(&tokens),
        [TokenKind::Lpar, TokenKind::Module, TokenKind::Rpar, TokenKind::Eof]
    );
    assert_eq!((tokens[0].line, tokens[0].columns), (2, (11, 12)));
}

#[test]
fn comment_punctuation_is_not_a_delimiter() {
    let (tokens, errors) = lex("(; a ( b ; c ) ;)nop");
    assert!(errors.is_empty());
    assert_eq!(kinds(&tokens), [TokenKind::Nop, TokenKind::Eof]);
}

#[test]
fn unterminated_block_comment_ends_the_stream() {
    let mut lexer = Lexer::from_buffer(
        "test.wast",
        b"(module (; (; ;) (func))",
        CollectingHandler::new(),
    );
    assert_eq!(lexer.next_token().kind, TokenKind::Lpar);
    assert_eq!(lexer.next_token().kind, TokenKind::Module);
    assert!(lexer.next_token().is_eof());
    assert!(lexer.next_token().is_eof());
    assert_eq!(lexer.handler().messages(), ["unterminated block comment"]);
}

// === Error recovery ===

#[test]
fn bad_escape_still_yields_text() {
    let (tokens, errors) = lex(r#""ab\qcd" nop"#);
    assert_eq!(errors, [r#"bad escape "\q""#]);
    assert_eq!(tokens[0].kind, TokenKind::Text);
    assert_eq!(tokens[0].value, r#""ab\qcd""#);
    assert_eq!(tokens[0].columns, (1, 9));
    assert_eq!(tokens[1].kind, TokenKind::Nop);
}

#[test]
fn bad_escape_location_points_at_the_escape() {
    let mut lexer = Lexer::from_buffer("test.wast", br#""ab\qcd""#, CollectingHandler::new());
    lex_all(&mut lexer);
    let error = &lexer.handler().errors()[0];
    assert_eq!((error.line, error.first_column, error.last_column), (1, 4, 6));
    assert_eq!(error.source_line.as_ref().map(|l| l.text.as_str()), Some(r#""ab\qcd""#));
}

#[test]
fn newline_in_string_resumes_on_the_next_line() {
    let (tokens, errors) = lex("\"ab\n(module)");
    assert_eq!(errors, ["newline in string"]);
    assert_eq!(
        kinds(&tokens),
        [TokenKind::Lpar, TokenKind::Module, TokenKind::Rpar, TokenKind::Eof]
    );
    assert_eq!((tokens[0].line, tokens[0].columns), (2, (1, 2)));
}

#[test]
fn illegal_bytes_in_strings() {
    let (tokens, errors) = lex("\"a\u{1}b\u{7f}\"");
    assert_eq!(errors, ["illegal character in string", "illegal character in string"]);
    assert_eq!(tokens[0].kind, TokenKind::Text);
    assert_eq!(tokens[0].columns, (1, 7));
}

#[test]
fn string_cut_off_by_end_of_input() {
    let (tokens, errors) = lex("(data \"abc\\");
    assert_eq!(errors, ["illegal character in string", "unexpected EOF"]);
    assert_eq!(kinds(&tokens), [TokenKind::Lpar, TokenKind::Data, TokenKind::Eof]);
}

#[test]
fn unknown_atoms_are_skipped() {
    let (tokens, errors) = lex("(module i32.addd)");
    assert_eq!(errors, [r#"unexpected token "i32.addd""#]);
    assert_eq!(
        kinds(&tokens),
        [TokenKind::Lpar, TokenKind::Module, TokenKind::Rpar, TokenKind::Eof]
    );
}

#[test]
fn stray_bytes_are_unexpected_chars() {
    let (tokens, errors) = lex("( ; ) [");
    assert_eq!(errors, ["unexpected char", "unexpected char"]);
    assert_eq!(kinds(&tokens), [TokenKind::Lpar, TokenKind::Rpar, TokenKind::Eof]);
}

#[test]
fn interior_nul_is_not_end_of_input() {
    let (tokens, errors) = lex_with(b"(\0)", LexerConfig::default());
    assert_eq!(errors, ["unexpected char"]);
    assert_eq!(kinds(&tokens), [TokenKind::Lpar, TokenKind::Rpar, TokenKind::Eof]);

    let (tokens, errors) = lex_with(b"\"a\0b\"", LexerConfig::default());
    assert_eq!(errors, ["illegal character in string"]);
    assert_eq!(tokens[0].kind, TokenKind::Text);
}

#[test]
fn source_lines_are_attached_unless_disabled() {
    let mut lexer = Lexer::from_buffer(
        "test.wast",
        b"(module\n  $ok oops)",
        CollectingHandler::new(),
    );
    lex_all(&mut lexer);
    let error = &lexer.handler().errors()[0];
    assert_eq!(error.line, 2);
    assert_eq!(error.source_line.as_ref().map(|l| l.text.as_str()), Some("  $ok oops)"));

    let mut lexer = Lexer::from_buffer(
        "test.wast",
        b"oops",
        CollectingHandler::with_source_line_max_length(0),
    );
    lex_all(&mut lexer);
    assert_eq!(lexer.handler().errors()[0].source_line, None);
}

#[test]
fn terminal_rendering() {
    let mut output = Vec::new();
    {
        let config = HandlerConfig {
            color: ColorMode::Never,
            ..HandlerConfig::default()
        };
        let handler = TerminalHandler::with_config(&mut output, config, false);
        let mut lexer = Lexer::from_buffer("test.wast", b"(module i32.addd)", handler);
        lex_all(&mut lexer);
        assert_eq!(lexer.handler().error_count(), 1);
    }
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "test.wast:1:9: error: unexpected token \"i32.addd\"\n(module i32.addd)\n        ^~~~~~~~\n"
    );
}

// === Buffering ===

#[test]
fn token_longer_than_the_buffer() {
    let body = "x".repeat(10_000);
    let source = format!("(data \"{body}\")");
    let (tokens, errors) = lex_with(
        source.as_bytes(),
        LexerConfig {
            initial_buffer_size: 16,
        },
    );
    assert!(errors.is_empty());
    assert_eq!(tokens[2].kind, TokenKind::Text);
    assert_eq!(tokens[2].value.len(), 10_002);
    assert_eq!(tokens[2].columns, (7, 7 + 10_002));
    assert_eq!(tokens[3].kind, TokenKind::Rpar);
}

#[test]
fn file_and_buffer_sources_agree() {
    let source = b"(module\n  (memory 1)\n  (func $f (result f64) (f64.const -0x1p-3)))\n";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(source).unwrap();
    let path = file.path().to_str().unwrap().to_owned();

    let mut from_file = Lexer::from_file(&path, CollectingHandler::new())
        .unwrap()
        .with_config(LexerConfig {
            initial_buffer_size: 4,
        });
    let file_tokens: Vec<(TokenKind, String, u32, (u32, u32))> = lex_all(&mut from_file)
        .into_iter()
        .map(|t| (t.kind, t.value, t.line, t.columns))
        .collect();
    let (buffer_tokens, errors) = lex_with(source, LexerConfig::default());
    assert!(errors.is_empty());
    assert_eq!(
        file_tokens,
        buffer_tokens
            .into_iter()
            .map(|t| (t.kind, t.value, t.line, t.columns))
            .collect::<Vec<_>>()
    );
    assert_eq!(from_file.filename(), path);
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.wast");
    let path = path.to_str().unwrap();
    assert!(matches!(
        Lexer::from_file(path, CollectingHandler::new()),
        Err(SourceError::Open { .. })
    ));
}

#[test]
fn read_failure_ends_the_stream() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().to_str().unwrap().to_owned();

    // A directory opens but cannot be read.
    let mut lexer = Lexer::from_file(&path, CollectingHandler::new()).unwrap();
    assert!(lexer.next_token().is_eof());
    assert!(lexer.next_token().is_eof());

    let messages = lexer.handler().messages();
    assert_eq!(messages.len(), 1, "{messages:?}");
    assert!(messages[0].starts_with("unable to read source: "), "{messages:?}");
}

#[test]
fn string_cut_off_stays_at_end() {
    let mut lexer = Lexer::from_buffer("test.wast", b"\"ab", CollectingHandler::new());
    assert!(lexer.next_token().is_eof());
    assert!(lexer.next_token().is_eof());
    assert_eq!(lexer.handler().messages(), ["unexpected EOF"]);
}

const FRAGMENTS: &[&str] = &[
    "(",
    ")",
    "module",
    "i32.add",
    "get_local",
    "f32x4.swizzle",
    "$name",
    "offset=8",
    "-12",
    "0x1.8p3",
    "nan:0xf",
    "\"text\\n\"",
    "\"bad\\q\"",
    "\"broken\nline\"",
    ";; note\n",
    "(; a (; b ;) ;)",
    "\n",
    "\t",
    "i32.addd",
    "\u{1}",
    ";",
];

proptest! {
    #[test]
    fn refill_does_not_change_the_stream(
        picks in proptest::collection::vec(0..FRAGMENTS.len(), 0..60),
        initial_buffer_size in 1usize..64,
    ) {
        let source = picks.iter().map(|&i| FRAGMENTS[i]).collect::<Vec<_>>().join(" ");
        let reference = lex(&source);
        let tiny = lex_with(source.as_bytes(), LexerConfig { initial_buffer_size });
        prop_assert_eq!(&reference, &tiny);
        prop_assert_eq!(reference, lex(&source));
    }
}
