/// Core parsing entry point.
///
/// Drives the frame stack over the token stream and returns the finished
/// expression tree.
pub mod core;

/// Per-nesting-level parser state.
///
/// Holds pending operands and operators and performs precedence merges.
mod frame;

/// Token adjacency rules.
mod validate;

pub use self::core::{ParseResult, parse};
