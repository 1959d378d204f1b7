/// Parser state and entry point.
///
/// Holds the tokenizer and the single lookahead token, and implements the
/// helpers that advance and match it.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative levels of the grammar: additive
/// expressions and multiplicative terms.
pub mod binary;

/// Unary and primary parsing.
///
/// Implements factors: signs, numeric literals and parenthesized
/// sub-expressions.
pub mod unary;

pub use self::core::{MAX_DEPTH, ParseResult, Parser};
