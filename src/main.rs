//! STLC interpreter CLI.
//!
//! Runs code from a `-c` flag, a file, or stdin, in that priority order;
//! starts an interactive REPL when invoked with no input on a terminal.

use clap::Parser;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use stlc::errors::report_error;

#[derive(Parser)]
#[command(name = "stlc")]
#[command(version)]
#[command(about = "Interpreter for the simply typed lambda calculus")]
#[command(after_help = "\
Examples:
  stlc                      # Start REPL
  stlc file.stlc            # Run file
  stlc -c \"(\\x:Int.x) 42\"   # Execute code
  echo \"code\" | stlc -      # Read from stdin")]
struct Cli {
    /// Execute STLC code from the command line
    #[arg(short = 'c', value_name = "CODE")]
    command: Option<String>,

    /// Source file to run ('-' for stdin); a REPL starts when omitted and
    /// stdin is a terminal
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(code) = cli.command.as_deref() {
        return run_code(code, "<command-line>");
    }

    match cli.file.as_deref() {
        Some(path) if path.as_os_str() == "-" => run_stdin(),
        Some(path) => run_file(path),
        None => {
            if io::stdin().is_terminal() {
                repl()
            } else {
                run_stdin()
            }
        }
    }
}

fn run_file(path: &Path) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
    };
    run_code(&source, &path.display().to_string())
}

fn run_stdin() -> ExitCode {
    let mut source = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut source) {
        eprintln!("error: {}", err);
        return ExitCode::FAILURE;
    }
    run_code(&source, "<stdin>")
}

/// Run one program through the pipeline, printing the value on stdout or
/// the diagnostic on stderr.
fn run_code(source: &str, filename: &str) -> ExitCode {
    match stlc::run(source) {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            if let Some(span) = err.span() {
                report_error(filename, source, span, &err.to_string());
            }
            ExitCode::FAILURE
        }
    }
}

fn repl() -> ExitCode {
    println!("STLC REPL");
    println!("Type :quit or :q to exit, :help for help");
    println!();

    loop {
        print!("stlc> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => {
                // EOF (Ctrl-D)
                println!();
                break;
            }
            Ok(_) => {}
            Err(err) => {
                eprintln!("error: {}", err);
                return ExitCode::FAILURE;
            }
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            match command {
                "quit" | "q" => {
                    println!("Goodbye!");
                    return ExitCode::SUCCESS;
                }
                "help" | "h" => print_repl_help(),
                _ => eprintln!("error: unknown command: :{}", command),
            }
            continue;
        }

        match stlc::run(line) {
            Ok(value) => println!("=> {}", value),
            Err(err) => eprintln!("error: {}", err),
        }
    }

    println!("Goodbye!");
    ExitCode::SUCCESS
}

fn print_repl_help() {
    println!("REPL Commands:");
    println!("  :quit, :q  - Exit the REPL");
    println!("  :help, :h  - Show this help message");
    println!();
    println!("Examples:");
    println!("  42");
    println!("  true");
    println!("  (\\x:Int.x) 42");
    println!("  (\\f:Int->Int.\\x:Int.f (f x))");
}
