use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::evaluator::binary::eval_binary,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree and returns its integer value.
///
/// The tree is walked post-order: both operands of a `BinaryOp` are
/// evaluated, left first, before its operator is applied, and each node is
/// visited exactly once. The walk uses an explicit work stack rather than
/// recursion, so a left-deep chain of any length evaluates in constant call
/// depth. Division truncates toward zero.
///
/// # Parameters
/// - `expr`: Root of the tree to evaluate.
///
/// # Errors
/// - `DivisionByZero` when the right operand of a `/` evaluates to zero.
/// - `Overflow` when an intermediate result does not fit in an `i64`.
///
/// # Example
/// ```
/// use infix::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::core::evaluate,
/// };
///
/// let seven = Expr::Literal { value: 7, position: 0 };
/// let two = Expr::Literal { value: 2, position: 2 };
/// let tree = Expr::binary(seven, BinaryOperator::Div, two, 1);
/// assert_eq!(evaluate(&tree).unwrap(), 3);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    enum Step<'a> {
        Visit(&'a Expr),
        Apply(BinaryOperator, usize),
    }

    let mut work = vec![Step::Visit(expr)];
    let mut values: Vec<i64> = Vec::new();

    while let Some(step) = work.pop() {
        match step {
            Step::Visit(Expr::Literal { value, .. }) => values.push(*value),
            Step::Visit(Expr::BinaryOp { left,
                                         op,
                                         right,
                                         position, }) => {
                work.push(Step::Apply(*op, *position));
                work.push(Step::Visit(right));
                work.push(Step::Visit(left));
            },
            Step::Apply(op, position) => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                    unreachable!("both operands are evaluated before their operator")
                };
                values.push(eval_binary(op, left, right, position)?);
            },
        }
    }

    let [value] = values.as_slice() else {
        unreachable!("a tree evaluates to exactly one value")
    };
    Ok(*value)
}
