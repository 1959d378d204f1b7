use crate::{error::LexError, interpreter::lexer::Token};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur when the token stream does not match
/// the grammar.
pub enum SyntaxError {
    /// Found a token other than the one the grammar required.
    UnexpectedToken {
        /// What the grammar would have accepted at this point.
        expected: &'static str,
        /// The token encountered.
        found:    Token,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// A complete expression was parsed but more tokens follow it.
    TrailingInput {
        /// The first extra token.
        found:    Token,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// Parentheses and unary signs are nested deeper than the parser allows.
    TooDeep {
        /// Byte offset of the token that exceeded the limit.
        position: usize,
    },
}

impl SyntaxError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::TrailingInput { position, .. }
            | Self::TooDeep { position } => *position,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found: Token::EndOfInput,
                                    position, } => write!(f,
                                                          "Unexpected end of input at position {position}: expected {expected}."),
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => write!(f,
                                                          "Unexpected token {found} at position {position}: expected {expected}."),
            Self::TrailingInput { found, position } => write!(f,
                                                              "Unexpected token {found} at position {position} after the end of the expression."),
            Self::TooDeep { position } => {
                write!(f, "Expression is nested too deeply at position {position}.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors the parser can return.
///
/// The parser pulls tokens on demand, so a lexical failure surfaces while
/// parsing and aborts it just like a syntax error does.
pub enum ParseError {
    /// The tokenizer rejected the input.
    Lex(LexError),
    /// The tokens do not match the grammar.
    Syntax(SyntaxError),
}

impl ParseError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::Syntax(e) => e.position(),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
        }
    }
}
