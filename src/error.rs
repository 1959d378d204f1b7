/// Lexical errors.
///
/// Raised by the tokenizer when the input contains a character that starts no
/// token, or a run of digits and dots that is not a valid number.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the errors raised while matching the token stream against the
/// grammar, and the combined error channel of the parser, which also carries
/// lexical failures met while advancing the lookahead.
pub mod parse_error;
/// Runtime errors.
///
/// Errors raised while reducing a well-formed tree to a number. Division by
/// zero is currently the only one.
pub mod runtime_error;
/// The single failure channel of the evaluation façade.
pub mod evaluation_error;

pub use evaluation_error::{ErrorKind, EvaluationError};
pub use lex_error::LexError;
pub use parse_error::{ParseError, SyntaxError};
pub use runtime_error::ArithmeticError;
