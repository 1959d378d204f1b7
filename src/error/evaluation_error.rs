use crate::error::{ArithmeticError, LexError, ParseError, SyntaxError};

/// The pipeline stage an [`EvaluationError`] originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The tokenizer rejected the input.
    Lex,
    /// The parser rejected the token stream.
    Syntax,
    /// The evaluator rejected the tree.
    Arithmetic,
}

#[derive(Debug, Clone, PartialEq)]
/// Wraps any failure of tokenizing, parsing or evaluating an expression.
///
/// The message is the cause's message behind a common prefix; the cause itself
/// stays available through [`std::error::Error::source`] and by matching on
/// the variant.
pub enum EvaluationError {
    /// Tokenizing failed.
    Lex(LexError),
    /// Parsing failed.
    Syntax(SyntaxError),
    /// Evaluating failed.
    Arithmetic(ArithmeticError),
}

impl EvaluationError {
    /// Returns which stage of the pipeline failed.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Arithmetic(_) => ErrorKind::Arithmetic,
        }
    }

    /// Byte offset in the source where the error was detected. Arithmetic
    /// errors belong to the tree rather than to a place in the text, so they
    /// have none.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Syntax(e) => Some(e.position()),
            Self::Arithmetic(_) => None,
        }
    }
}

impl From<LexError> for EvaluationError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for EvaluationError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<ParseError> for EvaluationError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Lex(e) => Self::Lex(e),
            ParseError::Syntax(e) => Self::Syntax(e),
        }
    }
}

impl From<ArithmeticError> for EvaluationError {
    fn from(e: ArithmeticError) -> Self {
        Self::Arithmetic(e)
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "Evaluation error: {e}"),
            Self::Syntax(e) => write!(f, "Evaluation error: {e}"),
            Self::Arithmetic(e) => write!(f, "Evaluation error: {e}"),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Arithmetic(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;
    use crate::interpreter::lexer::Token;

    #[test]
    fn parse_errors_keep_their_stage() {
        let lex = ParseError::Lex(LexError::UnexpectedCharacter { character: '@',
                                                                  position:  4, });
        let syntax = ParseError::Syntax(SyntaxError::TrailingInput { found:    Token::RParen,
                                                                     position: 1, });

        assert_eq!(EvaluationError::from(lex).kind(), ErrorKind::Lex);
        assert_eq!(EvaluationError::from(syntax).kind(), ErrorKind::Syntax);
    }

    #[test]
    fn positions_come_from_the_cause() {
        let lex = LexError::MalformedNumber { text:     "1.2.3".to_string(),
                                              position: 7, };
        let syntax = SyntaxError::TooDeep { position: 3 };

        assert_eq!(lex.position(), 7);
        assert_eq!(ParseError::Syntax(syntax.clone()).position(), 3);
        assert_eq!(EvaluationError::from(lex).position(), Some(7));
        assert_eq!(EvaluationError::from(syntax).position(), Some(3));
        assert_eq!(EvaluationError::from(ArithmeticError::DivisionByZero).position(), None);
    }

    #[test]
    fn message_wraps_the_cause() {
        let e = EvaluationError::from(ArithmeticError::DivisionByZero);

        assert_eq!(e.to_string(), "Evaluation error: Division by zero.");
        assert_eq!(e.source().map(|cause| cause.to_string()).as_deref(),
                   Some("Division by zero."));
    }

    #[test]
    fn syntax_messages_name_the_token() {
        let e = SyntaxError::UnexpectedToken { expected: "')'",
                                               found:    Token::EndOfInput,
                                               position: 6, };
        assert_eq!(e.to_string(),
                   "Unexpected end of input at position 6: expected ')'.");

        let e = SyntaxError::UnexpectedToken { expected: "a number, '(' or a sign",
                                               found:    Token::Star,
                                               position: 0, };
        assert_eq!(e.to_string(),
                   "Unexpected token STAR at position 0: expected a number, '(' or a sign.");
    }
}
