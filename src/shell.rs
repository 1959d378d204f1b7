use std::{
    io::{self, BufRead, Write},
    ops::ControlFlow,
};

use log::debug;

use crate::{evaluate_text, parse_text, tokenize_text};

const BANNER: &str = "=== Simple Arithmetic Expression Evaluator ===
Supports: +, -, *, /, parentheses, and decimal numbers";

const HELP: &str = "Enter an expression to evaluate it.
Commands: 'tokens <expr>' shows tokenization, 'ast <expr>' shows the parsed tree,
          'help' shows this message, 'quit' exits.";

const EXAMPLES: &str = "Examples: 2 + 3 * 4, (10 - 5) / 2.5, -3 + 4";

const PROMPT: &str = "Enter expression: ";

/// A single line of shell input, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// A blank line; ignored.
    Empty,
    /// `quit` or `exit`.
    Quit,
    /// `help`.
    Help,
    /// A command keyword given without its argument. Holds the usage text.
    Usage(&'static str),
    /// `tokens <expr>`: show how the expression is tokenized.
    Tokens(&'a str),
    /// `ast <expr>`: show the parsed tree.
    Ast(&'a str),
    /// Anything else is an expression to evaluate.
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// Classifies one line of input. Surrounding whitespace is ignored.
    ///
    /// # Example
    /// ```
    /// use exprcalc::shell::Command;
    ///
    /// assert_eq!(Command::parse("  tokens 1 + 2\n"), Command::Tokens("1 + 2"));
    /// assert_eq!(Command::parse("tokens"), Command::Usage("tokens <expression>"));
    /// assert_eq!(Command::parse("1 + 2"), Command::Evaluate("1 + 2"));
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();

        match line {
            "" => Self::Empty,
            "quit" | "exit" => Self::Quit,
            "help" => Self::Help,
            _ => {
                if let Some(expr) = argument_of(line, "tokens") {
                    if expr.is_empty() {
                        Self::Usage("tokens <expression>")
                    } else {
                        Self::Tokens(expr)
                    }
                } else if let Some(expr) = argument_of(line, "ast") {
                    if expr.is_empty() {
                        Self::Usage("ast <expression>")
                    } else {
                        Self::Ast(expr)
                    }
                } else {
                    Self::Evaluate(line)
                }
            },
        }
    }
}

/// Returns the text following `keyword` if `line` starts with it as a whole
/// word.
fn argument_of<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// Options that change how the shell talks to the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellOptions {
    /// Suppresses the banner, the prompt and the farewell message.
    pub quiet: bool,
}

/// A read-evaluate-print loop over any line source and output sink.
///
/// Each line is classified into a [`Command`] and handed to exactly one of the
/// library functions; evaluation errors are printed and the loop continues.
/// Only I/O errors end the loop early.
///
/// # Example
/// ```
/// use exprcalc::shell::{Shell, ShellOptions};
///
/// let input = "2 + 3 * 4\nquit\n".as_bytes();
/// let mut output = Vec::new();
///
/// Shell::new(input, &mut output, ShellOptions { quiet: true }).run().unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "Result: 14\n\n");
/// ```
pub struct Shell<R, W> {
    input:   R,
    output:  W,
    options: ShellOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell reading lines from `input` and writing to `output`.
    pub const fn new(input: R, output: W, options: ShellOptions) -> Self {
        Self { input,
               output,
               options }
    }

    /// Runs the loop until `quit` or the end of input.
    ///
    /// # Errors
    /// Returns any error raised while reading input or writing output.
    pub fn run(&mut self) -> io::Result<()> {
        if !self.options.quiet {
            writeln!(self.output, "{BANNER}\n{HELP}\n{EXAMPLES}\n")?;
        }

        let mut line = String::new();
        loop {
            if !self.options.quiet {
                write!(self.output, "{PROMPT}")?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if self.execute(Command::parse(&line))?.is_break() {
                break;
            }
        }

        if !self.options.quiet {
            writeln!(self.output, "Goodbye!")?;
        }
        self.output.flush()
    }

    /// Executes one command and reports whether the loop should stop.
    ///
    /// # Errors
    /// Returns any error raised while writing output.
    pub fn execute(&mut self, command: Command<'_>) -> io::Result<ControlFlow<()>> {
        debug!("shell command: {command:?}");

        match command {
            Command::Empty => {},
            Command::Quit => return Ok(ControlFlow::Break(())),
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Usage(usage) => writeln!(self.output, "Usage: {usage}")?,
            Command::Tokens(expr) => match tokenize_text(expr) {
                Ok(tokens) => {
                    let described = tokens.iter()
                                          .map(ToString::to_string)
                                          .collect::<Vec<_>>()
                                          .join(" ");
                    writeln!(self.output, "Tokens for \"{expr}\":\n{described}\n")?;
                },
                Err(e) => self.report(expr, &e, Some(e.position()))?,
            },
            Command::Ast(expr) => match parse_text(expr) {
                Ok(tree) => writeln!(self.output, "AST: {tree}\n")?,
                Err(e) => self.report(expr, &e, Some(e.position()))?,
            },
            Command::Evaluate(expr) => match evaluate_text(expr) {
                Ok(value) => writeln!(self.output, "Result: {value}\n")?,
                Err(e) => self.report(expr, &e, e.position())?,
            },
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Prints an error, pointing a caret at its position in `expr` when it
    /// has one.
    fn report(&mut self,
              expr: &str,
              error: &dyn std::error::Error,
              position: Option<usize>)
              -> io::Result<()> {
        writeln!(self.output, "Error: {error}")?;
        if let Some(position) = position {
            let column = expr.get(..position).map_or(0, |before| before.chars().count());
            writeln!(self.output, "  {expr}\n  {}^", " ".repeat(column))?;
        }
        writeln!(self.output)
    }
}
