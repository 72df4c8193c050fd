use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// The token categories the adjacency rules distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::interpreter::parser) enum TokenClass {
    Number,
    Operator,
    LParen,
    RParen,
}

impl From<&Token> for TokenClass {
    fn from(token: &Token) -> Self {
        match token {
            Token::Number(_) => Self::Number,
            Token::Operator(_) => Self::Operator,
            Token::LParen => Self::LParen,
            Token::RParen => Self::RParen,
        }
    }
}

const OPERAND: &str = "a number or '('";
const OPERATOR: &str = "an operator or ')'";

/// Checks that `token` may follow a token of class `previous`.
///
/// | Preceding          | Allowed next        |
/// |--------------------|---------------------|
/// | start, `(`, op     | number or `(`       |
/// | number, `)`        | operator or `)`     |
///
/// Parenthesis balance is not checked here; the frame stack does that.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` naming the offending token and what
/// was expected instead.
pub(in crate::interpreter::parser) fn validate_token(previous: Option<TokenClass>,
                                                     token: &Token,
                                                     position: usize)
                                                     -> ParseResult<()> {
    use TokenClass::{LParen, Number, Operator, RParen};

    let current = TokenClass::from(token);
    let (allowed, expected) = match previous {
        None | Some(LParen | Operator) => (matches!(current, Number | LParen), OPERAND),
        Some(Number | RParen) => (matches!(current, Operator | RParen), OPERATOR),
    };

    if allowed {
        Ok(())
    } else {
        Err(ParseError::UnexpectedToken { token: token.to_string(),
                                          expected,
                                          position })
    }
}

/// Checks that the input does not stop right after an operator or `(`.
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput` at the last token's position.
pub(in crate::interpreter::parser) fn validate_end(last: TokenClass,
                                                   position: usize)
                                                   -> ParseResult<()> {
    match last {
        TokenClass::Number | TokenClass::RParen => Ok(()),
        TokenClass::Operator | TokenClass::LParen => {
            Err(ParseError::UnexpectedEndOfInput { position })
        },
    }
}
