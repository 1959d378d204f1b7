//! # exprcalc
//!
//! exprcalc evaluates arithmetic expressions written as text. It supports
//! addition, subtraction, multiplication, division, parentheses, unary signs
//! and floating-point literals with the usual precedence rules.
//!
//! Evaluation is a three-stage pipeline: a tokenizer turns text into tokens,
//! a recursive-descent parser turns tokens into a tree, and an evaluator
//! reduces the tree to an `f64`. Every call starts from scratch; nothing is
//! shared between calls.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::{debug, trace};

use crate::{
    ast::Expr,
    error::{EvaluationError, LexError, ParseError},
    interpreter::{
        evaluator::evaluate,
        lexer::{Token, Tokenizer},
        parser::Parser,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and its operator types. The AST is
/// built by the parser and traversed by the evaluator.
pub mod ast;
/// Provides the error types of every pipeline stage.
///
/// Lexical, syntax and arithmetic errors each have their own type; the façade
/// wraps all of them into a single `EvaluationError`.
pub mod error;
/// Ties together tokenizing, parsing and evaluation.
///
/// # Responsibilities
/// - Provides the tokenizer, parser and evaluator.
/// - Passes errors from each stage to the next without converting them
///   silently.
pub mod interpreter;
/// The interactive line-oriented shell.
///
/// Reads commands, dispatches each to one façade function, and prints the
/// outcome. It contains no arithmetic of its own.
pub mod shell;

/// Evaluates an arithmetic expression and returns its value.
///
/// The text is tokenized, parsed and evaluated. A failure in any stage is
/// returned as an [`EvaluationError`] whose variant names the stage.
///
/// # Errors
/// Returns an error if the text contains an invalid character or number, does
/// not form a single expression, or divides by zero.
///
/// # Examples
/// ```
/// use exprcalc::{error::ErrorKind, evaluate_text};
///
/// assert_eq!(evaluate_text("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate_text("(10 - 5) / 2.5").unwrap(), 2.0);
///
/// let err = evaluate_text("5 / 0").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Arithmetic);
/// ```
pub fn evaluate_text(source: &str) -> Result<f64, EvaluationError> {
    debug!("evaluating {source:?}");

    let result = parse_text(source).map_err(EvaluationError::from)
                                   .and_then(|expr| evaluate(&expr).map_err(EvaluationError::from));

    match &result {
        Ok(value) => debug!("{source:?} evaluated to {value}"),
        Err(e) => debug!("{source:?} failed: {e}"),
    }
    result
}

/// Tokenizes an expression without parsing it.
///
/// The returned tokens run up to and including [`Token::EndOfInput`]. Their
/// `Display` form is the diagnostic description, such as `NUMBER(5)` or
/// `PLUS`.
///
/// # Errors
/// Returns the first [`LexError`] met, unwrapped.
///
/// # Examples
/// ```
/// use exprcalc::{interpreter::lexer::Token, tokenize_text};
///
/// let tokens = tokenize_text("-5 + 2.5").unwrap();
/// assert_eq!(tokens,
///            [Token::Minus, Token::Number(5.0), Token::Plus, Token::Number(2.5), Token::EndOfInput]);
/// ```
pub fn tokenize_text(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Tokenizer::new(source).collect::<Result<Vec<_>, _>>()?;
    trace!("tokenized {source:?} into {} tokens", tokens.len());
    Ok(tokens)
}

/// Parses an expression into its syntax tree without evaluating it.
///
/// # Errors
/// Returns the first lexical or syntax error met.
///
/// # Examples
/// ```
/// use exprcalc::parse_text;
///
/// assert_eq!(parse_text("2 + 3 * 4").unwrap().to_string(), "(2 + (3 * 4))");
/// assert!(parse_text("(2 + 3").is_err());
/// ```
pub fn parse_text(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source)?.parse()
}
