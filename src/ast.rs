use std::{fmt, mem};

use crate::interpreter::builtin::Function;

/// A binary arithmetic operator.
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
    /// `%`, floating-point remainder.
    Rem,
    /// `^`, right-associative power.
    Pow,
}

impl BinaryOperator {
    /// Returns the character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
            Self::Pow => '^',
        }
    }

    /// Returns the symbol with a space on either side, as the tree printer
    /// writes it.
    const fn padded_symbol(self) -> &'static str {
        match self {
            Self::Add => " + ",
            Self::Sub => " - ",
            Self::Mul => " * ",
            Self::Div => " / ",
            Self::Rem => " % ",
            Self::Pow => " ^ ",
        }
    }
}

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `-`, numeric negation.
    Negate,
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Every node exclusively owns its children, so a tree is finite and acyclic.
/// A tree is built by one call to the parser and consumed by one evaluation.
/// Named constants are folded into `Number` leaves while parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal or constant.
    Number(f64),
    /// A binary operation such as `a + b` or `a ^ b`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A prefix operation such as `-a`.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
    },
    /// A call of a builtin function such as `sin(a)`.
    FunctionCall {
        /// The called function.
        function: Function,
        /// The single argument.
        argument: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary operation node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Builds a negation node.
    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::UnaryOp { op:      UnaryOperator::Negate,
                        operand: Box::new(operand), }
    }

    /// Builds a function call node.
    #[must_use]
    pub fn call(function: Function, argument: Self) -> Self {
        Self::FunctionCall { function,
                             argument: Box::new(argument) }
    }
}

impl Expr {
    /// Moves every non-leaf child into `detached`, leaving a leaf in its place.
    fn detach_children(&mut self, detached: &mut Vec<Self>) {
        let children = match self {
            Self::Number(_) => return,
            Self::BinaryOp { left, right, .. } => [Some(left), Some(right)],
            Self::UnaryOp { operand: child, .. } | Self::FunctionCall { argument: child, .. } => {
                [Some(child), None]
            },
        };

        for child in children.into_iter().flatten() {
            if !matches!(**child, Self::Number(_)) {
                detached.push(mem::replace(&mut **child, Self::Number(0.0)));
            }
        }
    }
}

/// Frees the tree without recursing, so dropping a long operator chain cannot
/// exhaust the stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        self.detach_children(&mut detached);

        while let Some(mut expr) = detached.pop() {
            expr.detach_children(&mut detached);
        }
    }
}

/// Formats the tree fully parenthesised, which makes grouping visible.
///
/// # Example
/// ```
/// use exprcalc::interpreter::parser::Parser;
///
/// let ast = Parser::new().parse("-2^2").unwrap();
/// assert_eq!(ast.to_string(), "((-2) ^ 2)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self)];

        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(Self::Number(value)) => write!(f, "{value}")?,
                Piece::Node(Self::BinaryOp { left, op, right }) => {
                    f.write_str("(")?;
                    pieces.extend([Piece::Text(")"),
                                   Piece::Node(right),
                                   Piece::Text(op.padded_symbol()),
                                   Piece::Node(left)]);
                },
                Piece::Node(Self::UnaryOp { op: UnaryOperator::Negate,
                                            operand, }) => {
                    f.write_str("(-")?;
                    pieces.extend([Piece::Text(")"), Piece::Node(operand)]);
                },
                Piece::Node(Self::FunctionCall { function, argument }) => {
                    write!(f, "{function}(")?;
                    pieces.extend([Piece::Text(")"), Piece::Node(argument)]);
                },
            }
        }

        Ok(())
    }
}

/// Output still to be written while formatting a tree, in reverse order.
enum Piece<'a> {
    Text(&'static str),
    Node(&'a Expr),
}
