//! Property tests for the scanner.

use ori_lexer::{scan_tokens, TokenKind};
use proptest::prelude::*;

/// A single well-formed lexeme.
fn lexeme_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        "[0-9]{1,5}",
        "[0-9]{1,3}\\.[0-9]{1,3}",
        "\"[a-z \n]{0,10}\"",
        prop::sample::select(vec![
            "(", ")", "{", "}", "[", "]", ",", ".", ";", "-", "+", "*", "/", "%", "!", "!=", "=",
            "==", "<", "<=", ">", ">=", "&&", "||",
        ])
        .prop_map(str::to_string),
    ]
}

fn separator_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![" ", "\t", "\n", "\r\n", "  "]).prop_map(str::to_string)
}

/// Source made of well-formed lexemes, each separated by whitespace so that
/// neighbors cannot merge into a different lexeme.
fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((lexeme_strategy(), separator_strategy()), 0..30).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(lexeme, separator)| lexeme + &separator)
            .collect()
    })
}

proptest! {
    #[test]
    fn test_scan_never_panics(input in "\\PC{0,64}") {
        let scanned = scan_tokens(&input);
        prop_assert!(scanned.tokens.last().is_some_and(|t| t.kind == TokenKind::Eof));
    }

    #[test]
    fn test_exactly_one_eof_with_empty_lexeme(input in "\\PC{0,64}") {
        let tokens = scan_tokens(&input).tokens;

        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));
    }

    #[test]
    fn test_lines_are_non_decreasing(input in "[a-z0-9 \n\"/*#]{0,64}") {
        let tokens = scan_tokens(&input).tokens;

        for pair in tokens.windows(2) {
            prop_assert!(pair[0].line <= pair[1].line);
        }
    }

    #[test]
    fn test_well_formed_input_reconstructs(input in source_strategy()) {
        let scanned = scan_tokens(&input);
        prop_assert!(scanned.diagnostics.is_empty());

        // Gaps between consecutive lexemes hold only whitespace.
        let mut rebuilt = String::new();
        let mut end = 0;
        for token in &scanned.tokens {
            let gap = &input[end..token.span.start];
            prop_assert!(gap.chars().all(char::is_whitespace));
            rebuilt.push_str(gap);
            rebuilt.push_str(&token.lexeme);
            end = token.span.end;
        }
        prop_assert_eq!(rebuilt, input);

        // Only the terminal token has an empty lexeme.
        let empty = scanned.tokens.iter().filter(|t| t.lexeme.is_empty()).count();
        prop_assert_eq!(empty, 1);
    }
}
