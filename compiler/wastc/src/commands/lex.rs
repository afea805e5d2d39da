//! `wastc lex`: dump the token stream.

use std::io::IsTerminal;

use tracing::debug;
use wast_diagnostic::{SourceErrorHandler, TerminalHandler};
use wast_lexer::{Lexer, Token, TokenValue};

use super::CliOptions;

/// Lex `path`, printing tokens to stdout and errors to stderr. Returns
/// `false` if the file could not be opened or had lex errors.
pub fn lex_file(path: &str, options: &CliOptions) -> bool {
    let handler =
        TerminalHandler::stderr(options.handler.clone(), std::io::stderr().is_terminal());
    let mut lexer = match Lexer::from_file(path, handler) {
        Ok(lexer) => lexer,
        Err(err) => {
            eprintln!("error: {err}");
            return false;
        }
    };

    let lines = dump_tokens(&mut lexer);
    let errors = lexer.handler().error_count();
    debug!(path, tokens = lines.len(), errors, "lexed file");

    println!("Tokens for '{path}' ({} tokens):", lines.len());
    for line in &lines {
        println!("  {line}");
    }
    errors == 0
}

/// One line per token, the final `Eof` included.
pub(super) fn dump_tokens<H: SourceErrorHandler>(lexer: &mut Lexer<'_, H>) -> Vec<String> {
    let mut lines = Vec::new();
    loop {
        let token = lexer.next_token();
        lines.push(format_token(&token));
        if token.is_eof() {
            return lines;
        }
    }
}

/// `KIND [payload] @ line:first-last`
pub(super) fn format_token(token: &Token<'_>) -> String {
    let location = token.location;
    let span = format!(
        "{}:{}-{}",
        location.line, location.first_column, location.last_column
    );
    match token.value {
        TokenValue::None => format!("{} @ {span}", token.kind),
        value => format!("{} {value} @ {span}", token.kind),
    }
}
