//! `wastc line`: print one source line the way diagnostics show it.

use wast_diagnostic::CollectingHandler;
use wast_ir::Location;
use wast_lexer::Lexer;

use super::CliOptions;

pub fn print_line(path: &str, line: u32, options: &CliOptions) -> bool {
    let max_width = options.handler.source_line_max_length;
    let handler = CollectingHandler::with_source_line_max_length(max_width);
    let mut lexer = match Lexer::from_file(path, handler) {
        Ok(lexer) => lexer,
        Err(err) => {
            eprintln!("error: {err}");
            return false;
        }
    };

    match lexer.get_source_line(&Location::new(path, line, 1, 1), max_width) {
        Ok(source_line) => {
            println!("{}", source_line.text);
            true
        }
        Err(err) => {
            eprintln!("error: {err}");
            false
        }
    }
}
