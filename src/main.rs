// letterloop: single-letter toy language interpreter

use std::fmt;
use std::fs;
use std::io;

use clap::Parser;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use letterloop::interpret_with;

/// Program run when no source is given: prints 0 through 9.
const DEMO_PROGRAM: &str = "n = 0;\n{ n - 2*5 ?\n  < n;\n  n = n + 1;\n}\n.\n";

/// Interprets a letterloop program. Without arguments, runs a built-in demo.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as a path to a source file instead of program text.
    #[arg(short, long)]
    file: bool,

    /// Report progress on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Program text (or a file path with --file).
    contents: Option<String>,
}

fn report(error: &dyn fmt::Display) {
    let stderr = io::stderr();
    if stderr.is_tty() {
        eprintln!("{} {}", "Error:".red().bold(), error);
    } else {
        eprintln!("Error: {}", error);
    }
}

fn main() {
    let args = Args::parse();

    let (name, source) = match (&args.contents, args.file) {
        (None, _) => ("<demo>".to_string(), DEMO_PROGRAM.to_string()),
        (Some(path), true) => match fs::read_to_string(path) {
            Ok(source) => (path.clone(), source),
            Err(e) => {
                report(&format!("Failed to read '{}': {}", path, e));
                std::process::exit(1);
            }
        },
        (Some(text), false) => ("<argument>".to_string(), text.clone()),
    };

    if args.verbose {
        eprintln!("Interpreting {}...", name);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();

    match interpret_with(&source, stdin.lock(), stdout.lock()) {
        Ok(interpreter) => {
            if args.verbose {
                eprintln!("Execution completed successfully.");
                eprintln!("Loop iterations: {}", interpreter.total_loop_iterations());
            }
        }
        Err(e) => {
            report(&e);
            std::process::exit(1);
        }
    }
}
