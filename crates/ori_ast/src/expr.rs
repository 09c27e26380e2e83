//! Expression AST nodes.

use crate::ExprVisitor;
use ori_lexer::{Literal, Token};

/// An expression in Ori. Each node owns its children.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A binary operation (a + b, x == y, etc.)
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    /// A parenthesized expression
    Grouping { inner: Box<Expr> },

    /// A literal value, or `null` when absent
    Literal { value: Literal },

    /// A unary operation (-x, !b)
    Unary { operator: Token, operand: Box<Expr> },
}

impl Expr {
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping {
            inner: Box::new(inner),
        }
    }

    pub fn literal(value: impl Into<Literal>) -> Self {
        Expr::Literal {
            value: value.into(),
        }
    }

    /// The `null` literal.
    pub fn null() -> Self {
        Expr::Literal {
            value: Literal::None,
        }
    }

    pub fn unary(operator: Token, operand: Expr) -> Self {
        Expr::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    /// Dispatches to the visitor method matching this node's shape.
    ///
    /// Children are not visited here; the visitor decides when to recurse.
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Binary {
                left,
                operator,
                right,
            } => visitor.visit_binary(left, operator, right),
            Expr::Grouping { inner } => visitor.visit_grouping(inner),
            Expr::Literal { value } => visitor.visit_literal(value),
            Expr::Unary { operator, operand } => visitor.visit_unary(operator, operand),
        }
    }
}
