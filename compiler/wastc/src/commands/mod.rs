//! Command handlers for the `wastc` CLI.
//!
//! Option parsing is shared by every command and lives here; each
//! submodule implements one command.

use wast_diagnostic::{ColorMode, HandlerConfig, PrintHeader};

mod lex;
mod line;
mod opcodes;

pub use lex::lex_file;
pub use line::print_line;
pub use opcodes::print_opcodes;

/// Flags and positional arguments after the command name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub handler: HandlerConfig,
    pub positional: Vec<String>,
}

impl CliOptions {
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = CliOptions::default();
        for arg in args {
            if let Some(mode) = arg.strip_prefix("--color=") {
                options.handler.color = match mode {
                    "auto" => ColorMode::Auto,
                    "always" => ColorMode::Always,
                    "never" => ColorMode::Never,
                    _ => return Err(format!("unknown color mode '{mode}'")),
                };
            } else if let Some(width) = arg.strip_prefix("--max-line=") {
                options.handler.source_line_max_length = width
                    .parse()
                    .map_err(|_| format!("invalid line width '{width}'"))?;
            } else if let Some(header) = arg.strip_prefix("--header=") {
                options.handler.header = header.to_string();
                options.handler.print_header = PrintHeader::Once;
            } else if arg.starts_with("--") {
                return Err(format!("unknown option '{arg}'"));
            } else {
                options.positional.push(arg.clone());
            }
        }
        Ok(options)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
