//! WAST Tooling CLI
//!
//! Token dumps, the opcode table and source-line queries for `.wast` files.

mod commands;

use std::sync::Once;

use commands::{lex_file, print_line, print_opcodes, CliOptions};

static TRACING_INIT: Once = Once::new();

/// Install a subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=wast_lexer=debug` or `RUST_LOG=wast_lexer_core=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let options = match CliOptions::parse(&args[2..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    };

    match command.as_str() {
        "lex" => {
            let [path] = options.positional.as_slice() else {
                eprintln!("Usage: wastc lex <file.wast> [options]");
                std::process::exit(1);
            };
            if !lex_file(path, &options) {
                std::process::exit(1);
            }
        }
        "opcodes" => {
            print_opcodes();
        }
        "line" => {
            let [path, line] = options.positional.as_slice() else {
                eprintln!("Usage: wastc line <file.wast> <line> [--max-line=<n>]");
                std::process::exit(1);
            };
            let Ok(line) = line.parse::<u32>() else {
                eprintln!("error: invalid line number '{line}'");
                std::process::exit(1);
            };
            if !print_line(path, line, &options) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("wastc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("WebAssembly text tooling");
    println!();
    println!("Usage: wastc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.wast>          Tokenize and display tokens");
    println!("  opcodes                  List every defined opcode");
    println!("  line <file.wast> <n>     Print line <n> as diagnostics show it");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>      Color errors: auto (default), always, never");
    println!("  --max-line=<n>      Widest source line to show (default: 80, 0: no limit)");
    println!("  --header=<text>     Print <text> before the first error");
    println!();
    println!("Examples:");
    println!("  wastc lex testsuite/i32.wast");
    println!("  wastc lex broken.wast --color=never --max-line=0");
    println!("  wastc line testsuite/i32.wast 12 --max-line=40");
    println!("  RUST_LOG=wast_lexer=debug wastc lex testsuite/i32.wast");
}
