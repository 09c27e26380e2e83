//! Parenthesized prefix printing for expression trees.

use crate::{Expr, ExprVisitor};
use ori_lexer::{Literal, Token};

/// Render an expression as a fully-parenthesized prefix string,
/// e.g. `(* (- 123) (group 45.67))`.
pub fn print(expr: &Expr) -> String {
    AstPrinter.print(expr)
}

/// Visitor that renders expression trees for debugging.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut output = String::new();
        output.push('(');
        output.push_str(name);
        for expr in exprs {
            output.push(' ');
            output.push_str(&expr.accept(self));
        }
        output.push(')');
        output
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        self.parenthesize("group", &[inner])
    }

    fn visit_literal(&mut self, value: &Literal) -> String {
        value.to_string()
    }

    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[operand])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ori_lexer::TokenKind;
    use rstest::rstest;

    fn token(kind: TokenKind, lexeme: &str) -> Token {
        Token::synthetic(kind, lexeme, 1)
    }

    fn sample() -> Expr {
        Expr::binary(
            Expr::unary(token(TokenKind::Minus, "-"), Expr::literal(123.0)),
            token(TokenKind::Star, "*"),
            Expr::grouping(Expr::literal(45.67)),
        )
    }

    #[test]
    fn test_print_sample_tree() {
        assert_eq!(print(&sample()), "(* (- 123) (group 45.67))");
    }

    #[test]
    fn test_print_is_idempotent() {
        let tree = sample();
        let mut printer = AstPrinter;

        let first = printer.print(&tree);
        let second = printer.print(&tree);
        assert_eq!(first, second);
        assert_eq!(first, print(&tree));
    }

    #[rstest]
    #[case(Expr::null(), "null")]
    #[case(Expr::literal("text"), "text")]
    #[case(Expr::literal(0.5), "0.5")]
    #[case(Expr::grouping(Expr::grouping(Expr::literal(1.0))), "(group (group 1))")]
    #[case(Expr::unary(token(TokenKind::Bang, "!"), Expr::null()), "(! null)")]
    fn test_print_shapes(#[case] expr: Expr, #[case] expected: &str) {
        assert_eq!(print(&expr), expected);
    }

    #[test]
    fn test_binary_uses_operator_lexeme() {
        let tree = Expr::binary(
            Expr::literal(1.0),
            token(TokenKind::LessEqual, "<="),
            Expr::binary(Expr::literal(2.0), token(TokenKind::Plus, "+"), Expr::literal(3.0)),
        );

        assert_eq!(print(&tree), "(<= 1 (+ 2 3))");
    }
}
