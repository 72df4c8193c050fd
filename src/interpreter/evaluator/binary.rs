use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies a binary operator to two integers.
///
/// All operations are checked. Division is integer division truncating
/// toward zero, so `-7 / 2` is `-3`.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Byte offset of the operator, for error reporting.
///
/// # Errors
/// - `DivisionByZero` if `op` is `Div` and `right` is zero.
/// - `Overflow` if the result does not fit in an `i64` (this includes
///   `i64::MIN / -1`).
///
/// # Example
/// ```
/// use infix::{
///     ast::BinaryOperator,
///     error::EvalError,
///     interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Div, -7, 2, 0).unwrap(), -3);
///
/// let err = eval_binary(BinaryOperator::Div, 5, 0, 1).unwrap_err();
/// assert_eq!(err, EvalError::DivisionByZero { position: 1 });
///
/// let err = eval_binary(BinaryOperator::Mul, i64::MAX, 2, 1).unwrap_err();
/// assert!(matches!(err, EvalError::Overflow { .. }));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: i64,
                   right: i64,
                   position: usize)
                   -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(EvalError::DivisionByZero { position });
            }
            left.checked_div(right)
        },
    };

    result.ok_or(EvalError::Overflow { op, position })
}
