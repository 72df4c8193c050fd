/// Tree walking and the evaluator result type.
pub mod core;

/// Checked integer arithmetic for the four operators.
pub mod binary;

pub use self::core::{EvalResult, evaluate};
