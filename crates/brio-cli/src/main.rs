//! brio command-line driver: compile a script file and run it, streaming
//! the script's printed lines to stdout.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use brio_lang::{Interpreter, compile};

#[derive(Parser)]
#[command(name = "brio", version, about = "Brio script runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a brio script
    Run {
        /// Script file to execute
        script: PathBuf,
    },
    /// Parse and dump the statement tree (debug)
    Parse {
        /// Script file to parse
        script: PathBuf,
    },
    /// Tokenize and dump the token stream (debug)
    Tokens {
        /// Script file to tokenize
        script: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Run { script } => run_script(&script),
        Command::Parse { script } => parse_script(&script),
        Command::Tokens { script } => tokenize_script(&script),
    }
}

fn read_source(path: &PathBuf) -> Result<String, ExitCode> {
    std::fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read {}: {e}", path.display());
        ExitCode::from(2)
    })
}

fn compile_source(source: &str) -> Result<brio_lang::Program, ExitCode> {
    compile(source).map_err(|errors| {
        for e in &errors {
            eprintln!("{e}");
        }
        ExitCode::from(2)
    })
}

fn run_script(path: &PathBuf) -> ExitCode {
    let source = match read_source(path) { Ok(s) => s, Err(code) => return code };
    let program = match compile_source(&source) { Ok(p) => p, Err(code) => return code };

    let mut interp = Interpreter::new(&program);
    let result = interp.run();

    // lines printed before a fault are still script output
    for line in interp.take_output() {
        println!("{line}");
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("runtime error: {e}");
            ExitCode::from(1)
        }
    }
}

fn parse_script(path: &PathBuf) -> ExitCode {
    let source = match read_source(path) { Ok(s) => s, Err(code) => return code };
    let program = match compile_source(&source) { Ok(p) => p, Err(code) => return code };
    println!("{program:#?}");
    ExitCode::SUCCESS
}

fn tokenize_script(path: &PathBuf) -> ExitCode {
    let source = match read_source(path) { Ok(s) => s, Err(code) => return code };
    match brio_lang::syntax::lexer::Lexer::new(&source).tokenize() {
        Ok(tokens) => {
            for tok in &tokens {
                println!("{}:{}\t{:?}", tok.line, tok.column, tok.kind);
            }
            ExitCode::SUCCESS
        }
        Err(errors) => {
            for e in &errors {
                eprintln!("{e}");
            }
            ExitCode::from(2)
        }
    }
}
