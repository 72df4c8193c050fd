use log::debug;
use logos::Logos;

use crate::{ast::BinaryOperator, error::LexError};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
///
/// Whitespace, including Unicode whitespace such as U+00A0, is skipped
/// between tokens, so it still separates two digit runs: `2 3` is two
/// numbers, not `23`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. Negative literals do not exist;
    /// a leading `-` is always the subtraction operator.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `+`, `-`, `*` or `/`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    Operator(BinaryOperator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "'{op}'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the digits do not fit in an `i64`; the lexer then reports an
///   error for this slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Converts source text into an ordered sequence of tokens.
///
/// Each token is paired with its byte offset in `source`, which later stages
/// use for error reporting.
///
/// # Errors
/// - `LexError::InvalidCharacter` for any character other than a digit,
///   whitespace, `+ - * /` or a parenthesis.
/// - `LexError::IntegerOverflow` for a digit run larger than `i64::MAX`.
///
/// # Example
/// ```
/// use infix::{
///     ast::BinaryOperator,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("12 * (3)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(12), 0),
///                 (Token::Operator(BinaryOperator::Mul), 3),
///                 (Token::LParen, 5),
///                 (Token::Number(3), 6),
///                 (Token::RParen, 7)]);
///
/// assert!(tokenize("2 # 3").is_err());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => return Err(lex_error(lexer.slice(), position)),
        }
    }

    debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}

/// Classifies a slice the lexer could not turn into a token.
///
/// A slice made only of digits matched the integer pattern but failed to
/// parse, so it overflowed. Anything else starts with an unknown character.
fn lex_error(slice: &str, position: usize) -> LexError {
    if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
        return LexError::IntegerOverflow { literal: slice.to_string(),
                                           position };
    }

    LexError::InvalidCharacter { character: slice.chars()
                                                 .next()
                                                 .unwrap_or(char::REPLACEMENT_CHARACTER),
                                 position }
}
