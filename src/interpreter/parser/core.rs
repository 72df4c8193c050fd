use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            frame::Frame,
            validate::{TokenClass, validate_end, validate_token},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token stream into an expression tree.
///
/// This is the entry point for parsing. Instead of recursing per grouping
/// level, the parser keeps an explicit stack of frames: the root frame
/// plus one per open `(`. Operands and operators are pushed onto the top
/// frame, precedence merges only ever happen inside that frame, and a `)`
/// collapses the top frame into a single operand of the frame below it.
///
/// Each token is checked against its predecessor before it is used, so
/// the first malformed token aborts the parse.
///
/// # Parameters
/// - `tokens`: `(Token, position)` pairs as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The root of the expression tree.
///
/// # Errors
/// - `EmptyInput` for an empty token stream.
/// - `UnexpectedToken` when two operands or two operators touch, an operator
///   starts the input, or a group is empty.
/// - `UnexpectedEndOfInput` when the input ends on an operator or `(`.
/// - `UnmatchedCloseParen` / `UnclosedParen` for unbalanced parentheses.
///
/// # Example
/// ```
/// use infix::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// let tree = parse(&tokens).unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
///
/// let tokens = tokenize("(2 + 3").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut frames = vec![Frame::root()];
    let mut previous: Option<(TokenClass, usize)> = None;

    for &(token, position) in tokens {
        validate_token(previous.map(|(class, _)| class), &token, position)?;
        previous = Some((TokenClass::from(&token), position));

        match token {
            Token::Number(value) => {
                top_frame(&mut frames, position)?.push_operand(Expr::Literal { value, position });
            },
            Token::Operator(op) => top_frame(&mut frames, position)?.push_operator(op, position)?,
            Token::LParen => frames.push(Frame::group(position)),
            Token::RParen => {
                let group = match frames.pop() {
                    Some(frame) if !frames.is_empty() => frame.resolve(position)?,
                    _ => return Err(ParseError::UnmatchedCloseParen { position }),
                };
                top_frame(&mut frames, position)?.push_operand(group);
            },
        }
    }

    let Some((last, last_position)) = previous else {
        return Err(ParseError::EmptyInput);
    };
    validate_end(last, last_position)?;

    if frames.len() > 1 {
        let position = frames.last()
                             .and_then(Frame::opened_at)
                             .unwrap_or(last_position);
        return Err(ParseError::UnclosedParen { position });
    }

    let expr = frames.pop()
                     .ok_or(ParseError::MalformedFrame { position: last_position })?
                     .resolve(last_position)?;

    debug!("parsed {} tokens into {expr}", tokens.len());
    Ok(expr)
}

/// The innermost open frame.
fn top_frame(frames: &mut [Frame], position: usize) -> ParseResult<&mut Frame> {
    frames.last_mut()
          .ok_or(ParseError::MalformedFrame { position })
}
