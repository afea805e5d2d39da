//! Terminal Handler
//!
//! Prints diagnostics in the classic compiler layout:
//!
//! ```text
//! test.wast:2:9: error: unexpected token "i32.addd"
//!   (func i32.addd)
//!         ^~~~~~~~
//! ```


use std::io::{self, Write};

use crate::{Diagnostic, SourceErrorHandler, DEFAULT_SOURCE_LINE_MAX_LENGTH};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const MARKER: &str = "\x1b[1;32m"; // Bold green
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against terminal detection done by the caller. `is_tty` only
    /// matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// When to print the configured header before a diagnostic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrintHeader {
    #[default]
    Never,
    /// On a line of its own before the first diagnostic only.
    Once,
    /// As a prefix on every diagnostic.
    Always,
}

/// Settings for a [`TerminalHandler`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Widest source line to show; `0` turns source lines off.
    pub source_line_max_length: usize,
    pub print_header: PrintHeader,
    pub header: String,
    pub color: ColorMode,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        HandlerConfig {
            source_line_max_length: DEFAULT_SOURCE_LINE_MAX_LENGTH,
            print_header: PrintHeader::Never,
            header: String::new(),
            color: ColorMode::Auto,
        }
    }
}

/// Writes each diagnostic to `W` as it arrives.
pub struct TerminalHandler<W: Write> {
    writer: W,
    colors: bool,
    config: HandlerConfig,
    header_pending: bool,
    error_count: usize,
}

impl<W: Write> TerminalHandler<W> {
    /// `is_tty` resolves [`ColorMode::Auto`].
    pub fn with_config(writer: W, config: HandlerConfig, is_tty: bool) -> Self {
        TerminalHandler {
            writer,
            colors: config.color.should_use_colors(is_tty),
            header_pending: config.print_header == PrintHeader::Once,
            config,
            error_count: 0,
        }
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_header(&mut self) {
        match self.config.print_header {
            PrintHeader::Never => {}
            PrintHeader::Once => {
                if self.header_pending {
                    self.header_pending = false;
                    let _ = writeln!(self.writer, "{}:", self.config.header);
                }
            }
            PrintHeader::Always => {
                let _ = write!(self.writer, "{}:", self.config.header);
            }
        }
    }

    /// The source line, then a marker under the reported columns.
    ///
    /// The marker starts at `first_column` shifted left by however much
    /// was clipped off the front of the line, is at least one column wide,
    /// and never runs past the end of the shown text.
    fn write_source_line(&mut self, diagnostic: &Diagnostic<'_>) {
        let Some(source_line) = &diagnostic.source_line else {
            return;
        };
        if source_line.text.is_empty() {
            return;
        }
        let location = diagnostic.location;
        let _ = writeln!(self.writer, "{}", source_line.text);

        let line_len = source_line.text.chars().count();
        let spaces = (location.first_column as usize)
            .saturating_sub(1)
            .saturating_sub(source_line.column_offset)
            .min(line_len);
        let carets = (location.width() as usize)
            .min(line_len - spaces)
            .max(1);

        let marker = format!("^{}", "~".repeat(carets - 1));
        let _ = write!(self.writer, "{:spaces$}", "");
        self.write_colored(&marker, colors::MARKER);
        let _ = writeln!(self.writer);
    }
}

impl TerminalHandler<io::Stderr> {
    pub fn stderr(config: HandlerConfig, is_tty: bool) -> Self {
        Self::with_config(io::stderr(), config, is_tty)
    }
}

impl<W: Write> SourceErrorHandler for TerminalHandler<W> {
    fn on_error(&mut self, diagnostic: &Diagnostic<'_>) {
        self.error_count += 1;
        self.write_header();

        let location = diagnostic.location;
        if self.colors {
            let _ = write!(self.writer, "{}{location}:{} ", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "{location}: ");
        }
        self.write_colored("error", colors::ERROR);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        self.write_source_line(diagnostic);
        self.flush();
    }

    fn source_line_max_length(&self) -> usize {
        self.config.source_line_max_length
    }
}
