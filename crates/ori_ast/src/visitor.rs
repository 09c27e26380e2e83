//! The visitor protocol over expression trees.

use crate::Expr;
use ori_lexer::{Literal, Token};

/// An operation over expression trees.
///
/// There is one required method per [`Expr`] shape and none of them have a
/// default body, so adding a shape breaks every visitor until it handles it.
/// Methods receive the node's fields and recurse with `child.accept(self)`
/// as needed.
pub trait ExprVisitor {
    type Output;

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Self::Output;

    fn visit_grouping(&mut self, inner: &Expr) -> Self::Output;

    fn visit_literal(&mut self, value: &Literal) -> Self::Output;

    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> Self::Output;
}
