use log::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// One nesting level of the parser.
///
/// A frame holds the operands and operators seen since its `(` (or since the
/// start of input for the root frame) that have not yet been combined.
/// Operators are merged eagerly when precedence allows, so the pending
/// operators are always in strictly increasing precedence from bottom to top.
#[derive(Debug)]
pub(in crate::interpreter::parser) struct Frame {
    operands:  Vec<Expr>,
    /// Pending operators with the byte offset they were read at.
    operators: Vec<(BinaryOperator, usize)>,
    /// Byte offset of the `(` that opened this frame; `None` for the root.
    opened_at: Option<usize>,
}

impl Frame {
    /// The implicit outermost frame.
    pub(in crate::interpreter::parser) const fn root() -> Self {
        Self { operands:  Vec::new(),
               operators: Vec::new(),
               opened_at: None, }
    }

    /// A frame for a group opened by the `(` at `position`.
    pub(in crate::interpreter::parser) const fn group(position: usize) -> Self {
        Self { operands:  Vec::new(),
               operators: Vec::new(),
               opened_at: Some(position), }
    }

    pub(in crate::interpreter::parser) const fn opened_at(&self) -> Option<usize> {
        self.opened_at
    }

    pub(in crate::interpreter::parser) fn push_operand(&mut self, expr: Expr) {
        self.operands.push(expr);
    }

    /// Pushes an operator, first merging every pending operator that binds at
    /// least as tightly.
    ///
    /// Merging on equal precedence makes all operators left-associative:
    /// `10 - 2 - 3` becomes `((10 - 2) - 3)`.
    pub(in crate::interpreter::parser) fn push_operator(&mut self,
                                                        op: BinaryOperator,
                                                        position: usize)
                                                        -> ParseResult<()> {
        while let Some(&(top, _)) = self.operators.last()
              && top.precedence() >= op.precedence()
        {
            self.merge(position)?;
        }
        self.operators.push((op, position));
        Ok(())
    }

    /// Collapses the frame into a single expression.
    ///
    /// Pending operators are merged from the top of the stack down until one
    /// operand remains. `position` is the byte offset of the `)` closing the
    /// frame, or of the last token for the root frame.
    ///
    /// # Errors
    /// Returns `MalformedFrame` if the frame is empty or its operands and
    /// operators do not pair up. Token validation rules out both, including
    /// `()`.
    pub(in crate::interpreter::parser) fn resolve(mut self, position: usize) -> ParseResult<Expr> {
        while self.operands.len() > 1 {
            self.merge(position)?;
        }

        if !self.operators.is_empty() {
            return Err(ParseError::MalformedFrame { position });
        }

        self.operands.pop().ok_or(ParseError::MalformedFrame { position })
    }

    /// Replaces the two most recent operands and the most recent operator
    /// with one `BinaryOp` node.
    fn merge(&mut self, position: usize) -> ParseResult<()> {
        let (Some(right), Some((op, op_position)), Some(left)) =
            (self.operands.pop(), self.operators.pop(), self.operands.pop())
        else {
            return Err(ParseError::MalformedFrame { position });
        };

        trace!("merging '{op}' at {op_position}");
        self.operands.push(Expr::binary(left, op, right, op_position));
        Ok(())
    }
}
