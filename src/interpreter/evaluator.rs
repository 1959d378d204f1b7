/// Core evaluation logic.
///
/// Contains the recursive entry point that dispatches on the node variant.
pub mod core;

/// Binary operator evaluation.
///
/// Applies `+`, `-`, `*` and `/` to two already evaluated operands, checking
/// for division by zero.
pub mod binary;

/// Unary operator evaluation.
///
/// Applies the identity and negation signs.
pub mod unary;

pub use self::core::{EvalResult, evaluate};
