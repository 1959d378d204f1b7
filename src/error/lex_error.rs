#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing.
pub enum LexError {
    /// A character that is not whitespace, a digit, `.`, an operator or a
    /// parenthesis.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// A run of digits and dots that does not form a number, such as `1.2.3`.
    MalformedNumber {
        /// The rejected run.
        text:     String,
        /// Byte offset of the run in the source.
        position: usize,
    },
}

impl LexError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. } | Self::MalformedNumber { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },
            Self::MalformedNumber { text, position } => {
                write!(f, "Malformed number '{text}' at position {position}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
