use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` in the source.
        position: usize,
    },
    /// Arithmetic operation overflowed a 64-bit signed integer.
    Overflow {
        /// The operator whose result did not fit.
        op:       BinaryOperator,
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { op, position } => write!(f,
                                                      "Error at position {position}: Integer overflow while computing '{op}'."),
        }
    }
}

impl std::error::Error for EvalError {}
