use std::{fmt, ops::Range};

use logos::Logos;

use crate::error::LexError;

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// A token paired with the byte range it covers in the source.
pub type Spanned = (Token, Range<usize>);

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the
/// [`Tokenizer`]. Tokens carry no identity beyond their variant and payload.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `5.` or `42`.
    Number(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Sentinel produced once the input is exhausted. Requesting more tokens
    /// keeps producing it.
    EndOfInput,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "NUMBER({value})"),
            Self::Plus => write!(f, "PLUS"),
            Self::Minus => write!(f, "MINUS"),
            Self::Star => write!(f, "STAR"),
            Self::Slash => write!(f, "SLASH"),
            Self::LParen => write!(f, "LPAREN"),
            Self::RParen => write!(f, "RPAREN"),
            Self::EndOfInput => write!(f, "EOF"),
        }
    }
}

/// Raw lexemes recognised by the generated scanner.
///
/// Whitespace (spaces, tabs, newlines, vertical tabs and feeds) is skipped by
/// the scanner itself. The scanner knows nothing about the end-of-input
/// sentinel; [`Tokenizer`] adds it and turns scanner failures into
/// [`LexError`]s.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
enum Lexeme {
    /// A maximal run of digits and dots. The run must form a valid float.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl Lexeme {
    const fn into_token(self) -> Token {
        match self {
            Self::Number(value) => Token::Number(value),
            Self::Plus => Token::Plus,
            Self::Minus => Token::Minus,
            Self::Star => Token::Star,
            Self::Slash => Token::Slash,
            Self::LParen => Token::LParen,
            Self::RParen => Token::RParen,
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// Runs such as `1.2.3` or a lone `.` are rejected here, which makes the
/// scanner report an error for the whole run.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts source text into a lazy sequence of tokens.
///
/// The tokenizer keeps a cursor into the source. Each call to
/// [`Tokenizer::next_token`] skips whitespace, produces the next token and
/// advances the cursor past it. Once the input is exhausted every further call
/// yields [`Token::EndOfInput`].
///
/// As an [`Iterator`] the tokenizer yields every token up to and including
/// `EndOfInput`, or stops after the first error.
///
/// # Example
/// ```
/// use exprcalc::interpreter::lexer::{Token, Tokenizer};
///
/// let mut tokens = Tokenizer::new("2 * (1)");
/// assert_eq!(tokens.next_token().unwrap(), Token::Number(2.0));
/// assert_eq!(tokens.next_token().unwrap(), Token::Star);
/// assert_eq!(tokens.next_token().unwrap(), Token::LParen);
/// assert_eq!(tokens.next_token().unwrap(), Token::Number(1.0));
/// assert_eq!(tokens.next_token().unwrap(), Token::RParen);
/// assert_eq!(tokens.next_token().unwrap(), Token::EndOfInput);
/// assert_eq!(tokens.next_token().unwrap(), Token::EndOfInput);
/// ```
pub struct Tokenizer<'src> {
    source: &'src str,
    lexer:  logos::Lexer<'src, Lexeme>,
    done:   bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               lexer: Lexeme::lexer(source),
               done: false }
    }

    /// Returns the next token and advances the cursor past it.
    ///
    /// # Errors
    /// - [`LexError::UnexpectedCharacter`] for a character that starts no
    ///   token.
    /// - [`LexError::MalformedNumber`] for a run of digits and dots that is not
    ///   a valid float, such as `1.2.3`.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.next_spanned().map(|(token, _)| token)
    }

    /// Returns the next token together with the byte range it covers.
    ///
    /// The end-of-input sentinel covers the empty range at the end of the
    /// source.
    ///
    /// # Errors
    /// See [`Tokenizer::next_token`].
    pub fn next_spanned(&mut self) -> LexResult<Spanned> {
        match self.lexer.next() {
            Some(Ok(lexeme)) => Ok((lexeme.into_token(), self.lexer.span())),
            Some(Err(())) => Err(self.classify_error()),
            None => {
                let end = self.source.len();
                Ok((Token::EndOfInput, end..end))
            },
        }
    }

    /// Builds the error for the slice the scanner just rejected.
    fn classify_error(&self) -> LexError {
        let span = self.lexer.span();
        let rejected = self.source.get(span.start..).unwrap_or_default();

        match rejected.chars().next() {
            Some(c) if c.is_ascii_digit() || c == '.' => {
                let text = self.source.get(span.clone()).unwrap_or(rejected);
                LexError::MalformedNumber { text:     text.to_string(),
                                            position: span.start, }
            },
            Some(character) => LexError::UnexpectedCharacter { character,
                                                               position: span.start },
            None => LexError::UnexpectedCharacter { character: '\u{FFFD}',
                                                    position:  span.start, },
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.next_token();
        self.done = matches!(item, Ok(Token::EndOfInput) | Err(_));
        Some(item)
    }
}
