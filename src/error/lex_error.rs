#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that is not a digit, whitespace, operator or
    /// parenthesis.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// A digit run does not fit in a 64-bit signed integer.
    IntegerOverflow {
        /// The digits as written in the source.
        literal:  String,
        /// Byte offset of the first digit.
        position: usize,
    },
}

impl LexError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } | Self::IntegerOverflow { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Error at position {position}: Invalid character '{character}'.")
            },
            Self::IntegerOverflow { literal, position } => write!(f,
                                                                  "Error at position {position}: Integer literal {literal} is too large."),
        }
    }
}

impl std::error::Error for LexError {}
