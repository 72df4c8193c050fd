#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The token stream was empty.
    EmptyInput,
    /// A token appeared where the preceding token does not allow it.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// What the parser would have accepted instead.
        expected: &'static str,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// The input ended after an operator or an open parenthesis.
    UnexpectedEndOfInput {
        /// Byte offset of the last token.
        position: usize,
    },
    /// A `)` was found with no open `(` to close.
    UnmatchedCloseParen {
        /// Byte offset of the `)`.
        position: usize,
    },
    /// The input ended while a `(` was still open.
    UnclosedParen {
        /// Byte offset of the innermost unclosed `(`.
        position: usize,
    },
    /// The pending operands and operators of a group did not combine into a
    /// single expression. Token validation prevents this; it is reported
    /// instead of panicking if that invariant is ever broken.
    MalformedFrame {
        /// Byte offset where the group was resolved.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error: Empty expression."),

            Self::UnexpectedToken { token,
                                    expected,
                                    position, } => write!(f,
                                                          "Error at position {position}: Unexpected token {token}, expected {expected}."),

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at position {position}: Unexpected end of input.")
            },

            Self::UnmatchedCloseParen { position } => write!(f,
                                                             "Error at position {position}: Closing parenthesis ')' has no matching '('."),

            Self::UnclosedParen { position } => write!(f,
                                                       "Error at position {position}: Expected closing parenthesis ')' but none found."),

            Self::MalformedFrame { position } => write!(f,
                                                        "Error at position {position}: Operands and operators do not form an expression."),
        }
    }
}

impl std::error::Error for ParseError {}
