use std::{fmt, mem};

/// A binary arithmetic operator.
///
/// All four operators are left-associative. `*` and `/` bind tighter than
/// `+` and `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator.
    ///
    /// Higher values bind tighter: `*` and `/` are `2`, `+` and `-` are `1`.
    ///
    /// # Example
    /// ```
    /// use infix::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Add.precedence(), BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An expression tree node.
///
/// The tree is strictly owned: every `BinaryOp` exclusively owns both of its
/// children, so a parsed expression is always a single rooted tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value:    i64,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl Expr {
    /// Builds a `BinaryOp` node from two owned operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, position: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position }
    }

    /// Byte offset of the token this node was built from.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }
}

/// Renders the tree fully parenthesised, one pair of parentheses per
/// operation.
///
/// ```
/// use infix::ast::{BinaryOperator, Expr};
///
/// let one = Expr::Literal { value: 1, position: 0 };
/// let two = Expr::Literal { value: 2, position: 2 };
/// let three = Expr::Literal { value: 3, position: 4 };
/// let product = Expr::binary(two, BinaryOperator::Mul, three, 3);
/// let sum = Expr::binary(one, BinaryOperator::Add, product, 1);
///
/// assert_eq!(sum.to_string(), "(1 + (2 * 3))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'a> {
            Node(&'a Expr),
            Op(BinaryOperator),
            Close,
        }

        // Walks with an explicit stack so deep trees cannot exhaust the call
        // stack.
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(Self::Literal { value, .. }) => write!(f, "{value}")?,
                Piece::Node(Self::BinaryOp { left, op, right, .. }) => {
                    write!(f, "(")?;
                    pending.push(Piece::Close);
                    pending.push(Piece::Node(right));
                    pending.push(Piece::Op(*op));
                    pending.push(Piece::Node(left));
                },
                Piece::Op(op) => write!(f, " {op} ")?,
                Piece::Close => write!(f, ")")?,
            }
        }
        Ok(())
    }
}

/// Tears the tree down iteratively.
///
/// A chain like `1 + 1 + ... + 1` builds a tree as deep as it is long, and
/// the default recursive drop of nested boxes would overflow the stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl Expr {
    /// Moves every `BinaryOp` child of this node into `pending`, leaving a
    /// literal in its place.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        if let Self::BinaryOp { left, right, .. } = self {
            for child in [left, right] {
                if matches!(**child, Self::BinaryOp { .. }) {
                    pending.push(mem::replace(&mut **child,
                                              Self::Literal { value: 0, position: 0 }));
                }
            }
        }
    }
}
