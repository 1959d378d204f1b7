use std::{fmt, mem};

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The set of variants is closed: a numeric literal, a unary sign applied to
/// one operand, or a binary operator applied to two operands. Every child is
/// exclusively owned by its parent through a `Box`, so the tree is finite,
/// acyclic and dropped together with its root.
///
/// A flat operator chain such as `1 + 1 + ... + 1` yields a tree as deep as
/// the chain is long, so dropping and displaying walk the tree with an
/// explicit stack instead of recursing.
///
/// `Display` renders the tree fully parenthesized, which makes grouping and
/// associativity visible:
///
/// ```
/// use exprcalc::parse_text;
///
/// let expr = parse_text("10 - 5 - 2 * -3").unwrap();
/// assert_eq!(expr.to_string(), "((10 - 5) - (2 * (-3)))");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// A unary sign applied to an operand.
    Unary {
        /// The sign to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary arithmetic operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Creates a literal node.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal { value }
    }

    /// Creates a unary node owning `expr`.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::Unary { op,
                      expr: Box::new(expr) }
    }

    /// Creates a binary node owning both operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right) }
    }
}

/// One piece of output still to be written by `Display for Expr`.
enum Piece<'a> {
    Node(&'a Expr),
    Text(&'static str),
    UnaryOpen(UnaryOperator),
    BinaryOp(BinaryOperator),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(Self::Literal { value }) => write!(f, "{value}")?,
                Piece::Node(Self::Unary { op, expr }) => {
                    pending.extend([Piece::Text(")"), Piece::Node(expr), Piece::UnaryOpen(*op)]);
                },
                Piece::Node(Self::Binary { left, op, right }) => {
                    pending.extend([Piece::Text(")"),
                                    Piece::Node(right),
                                    Piece::BinaryOp(*op),
                                    Piece::Node(left),
                                    Piece::Text("(")]);
                },
                Piece::Text(text) => f.write_str(text)?,
                Piece::UnaryOpen(op) => write!(f, "({op}")?,
                Piece::BinaryOp(op) => write!(f, " {op} ")?,
            }
        }
        Ok(())
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        detach_children(self, &mut detached);

        // Each detached node is left childless before it goes out of scope.
        while let Some(mut expr) = detached.pop() {
            detach_children(&mut expr, &mut detached);
        }
    }
}

/// Moves the children of `expr` onto `detached`, leaving literal leaves in
/// their place.
fn detach_children(node: &mut Expr, detached: &mut Vec<Expr>) {
    match node {
        Expr::Literal { .. } => {},
        Expr::Unary { expr, .. } => detached.push(mem::replace(&mut **expr, Expr::literal(0.0))),
        Expr::Binary { left, right, .. } => {
            detached.push(mem::replace(&mut **left, Expr::literal(0.0)));
            detached.push(mem::replace(&mut **right, Expr::literal(0.0)));
        },
    }
}

/// Unary sign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`, the identity.
    Plus,
    /// `-x`, arithmetic negation.
    Minus,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
    /// Returns `true` for `*` and `/`, which bind tighter than `+` and `-`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}
