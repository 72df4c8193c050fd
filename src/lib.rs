//! # infix
//!
//! infix evaluates integer arithmetic expressions written in ordinary infix
//! notation, such as `(2 + 3) * 4`. It supports the four operators
//! `+ - * /` with the usual precedence, left associativity and parentheses.
//!
//! Evaluation is a three stage pipeline: the lexer turns text into tokens,
//! the parser turns tokens into an expression tree and the evaluator reduces
//! the tree to an `i64`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::Error,
    interpreter::{evaluator::evaluate, lexer::tokenize, parser::parse},
};

/// Defines the expression tree.
///
/// This module declares the `Expr` enum and the `BinaryOperator` it uses. The
/// tree is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines literal and binary operation nodes.
/// - Attaches source positions to nodes for error reporting.
/// - Renders trees in fully parenthesised form.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Each stage has its own error enum; [`Error`](error::Error) wraps whichever
/// stage failed first.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the stages of evaluation.
///
/// This module holds the lexer, parser and evaluator. Each stage is a pure
/// function of its input, so expressions can be evaluated from any number of
/// threads without coordination.
pub mod interpreter;

/// Evaluates an arithmetic expression and returns its value.
///
/// This runs the whole pipeline: tokenize, parse, evaluate. The first error
/// from any stage aborts the call and is returned; there is no partial
/// result.
///
/// # Errors
/// - [`Error::Lex`] for characters outside `0-9 + - * / ( )` and whitespace,
///   or integer literals that do not fit in an `i64`.
/// - [`Error::Parse`] for malformed expressions: empty input, adjacent
///   operands or operators, unbalanced parentheses.
/// - [`Error::Eval`] for division by zero or integer overflow.
///
/// # Examples
/// ```
/// use infix::{calculate, error::Error};
///
/// assert_eq!(calculate("2 + 3 * 4").unwrap(), 14);
/// assert_eq!(calculate("(2 + 3) * 4").unwrap(), 20);
/// assert_eq!(calculate("10 - 2 - 3").unwrap(), 5);
///
/// assert!(matches!(calculate("5 / 0"), Err(Error::Eval(_))));
/// assert!(matches!(calculate("2 ++ 3"), Err(Error::Parse(_))));
/// assert!(matches!(calculate("2 # 3"), Err(Error::Lex(_))));
/// ```
pub fn calculate(source: &str) -> Result<i64, Error> {
    let tokens = tokenize(source)?;
    let tree = parse(&tokens)?;
    let value = evaluate(&tree)?;

    debug!("{tree} = {value}");
    Ok(value)
}
