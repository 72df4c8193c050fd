/// Lexing errors.
///
/// Raised while turning source text into tokens: characters outside the
/// accepted set and integer literals too large to represent.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the expression tree
/// from tokens: invalid token adjacency, unbalanced parentheses and empty
/// input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while computing the value of a tree: division
/// by zero and integer overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any error produced by the [`calculate`](crate::calculate) pipeline.
///
/// Each variant wraps the error of the stage that failed. The first error
/// encountered aborts the whole call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// The token stream is not a well-formed expression.
    Parse(ParseError),
    /// The expression could not be evaluated.
    Eval(EvalError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
