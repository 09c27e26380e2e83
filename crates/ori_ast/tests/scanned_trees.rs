//! Trees built from scanned tokens print with the scanned lexemes.

use ori_ast::{print, Expr};
use ori_lexer::{scan_tokens, TokenKind};

#[test]
fn test_tree_from_scanned_operators() {
    let tokens = scan_tokens("- * 123 45.67").tokens;
    assert_eq!(tokens[0].kind, TokenKind::Minus);
    assert_eq!(tokens[1].kind, TokenKind::Star);

    let tree = Expr::binary(
        Expr::unary(tokens[0].clone(), Expr::literal(tokens[2].literal.clone())),
        tokens[1].clone(),
        Expr::grouping(Expr::literal(tokens[3].literal.clone())),
    );

    assert_eq!(print(&tree), "(* (- 123) (group 45.67))");
}

#[test]
fn test_string_literal_prints_without_quotes() {
    let tokens = scan_tokens("\"hello\" == nil").tokens;

    let tree = Expr::binary(
        Expr::literal(tokens[0].literal.clone()),
        tokens[1].clone(),
        Expr::literal(tokens[2].literal.clone()),
    );

    assert_eq!(print(&tree), "(== hello null)");
}
