use std::{io, process::ExitCode};

use clap::Parser;
use exprcalc::{
    evaluate_text, parse_text,
    shell::{Shell, ShellOptions},
    tokenize_text,
};

/// exprcalc evaluates arithmetic expressions with `+`, `-`, `*`, `/`,
/// parentheses and decimal numbers.
///
/// Without an expression it starts an interactive shell.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the tokens of the expression instead of evaluating it.
    #[arg(short, long, requires = "expression", conflicts_with = "ast")]
    tokens: bool,

    /// Prints the parsed tree of the expression instead of evaluating it.
    #[arg(short, long, requires = "expression")]
    ast: bool,

    /// Suppresses the banner, prompts and farewell of the interactive shell.
    #[arg(short, long)]
    quiet: bool,

    /// The expression to evaluate.
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match args.expression.as_deref() {
        Some(expression) => run_once(&args, expression),
        None => run_shell(args.quiet),
    }
}

fn run_once(args: &Args, expression: &str) -> ExitCode {
    let outcome = if args.tokens {
        tokenize_text(expression).map(|tokens| {
                                     tokens.iter()
                                           .map(ToString::to_string)
                                           .collect::<Vec<_>>()
                                           .join(" ")
                                 })
                                 .map_err(|e| e.to_string())
    } else if args.ast {
        parse_text(expression).map(|tree| tree.to_string())
                              .map_err(|e| e.to_string())
    } else {
        evaluate_text(expression).map(|value| value.to_string())
                                 .map_err(|e| e.to_string())
    };

    match outcome {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        },
    }
}

fn run_shell(quiet: bool) -> ExitCode {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match Shell::new(stdin, stdout, ShellOptions { quiet }).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        },
    }
}
