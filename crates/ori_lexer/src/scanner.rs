//! The scanner implementation for Ori.

use crate::{Cursor, Diagnostic, DiagnosticKind, Literal, Span, Token, TokenKind};

/// The result of scanning a source string.
#[derive(Clone, Debug, PartialEq)]
pub struct Scanned {
    /// Tokens in source order, always ending with a single [`TokenKind::Eof`].
    pub tokens: Vec<Token>,
    /// Diagnostics in the order they were encountered.
    pub diagnostics: Vec<Diagnostic>,
}

impl Scanned {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Scans `source` into tokens, collecting diagnostics along the way.
pub fn scan_tokens(source: &str) -> Scanned {
    Scanner::new(source).scan_tokens()
}

/// The scanner for Ori source code.
pub struct Scanner<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenizes the entire source.
    ///
    /// Never stops early on a bad lexeme: the offending input is skipped, a
    /// diagnostic is recorded, and scanning carries on.
    pub fn scan_tokens(mut self) -> Scanned {
        while !self.cursor.is_at_end() {
            self.cursor.begin_lexeme();
            self.scan_token();
        }

        let end = self.source.len();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            "",
            Literal::None,
            self.cursor.line(),
            Span::empty(end),
        ));

        tracing::debug!(
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            "scan complete"
        );

        Scanned {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Recognizes one lexeme starting at the beginning of the current lexeme.
    fn scan_token(&mut self) {
        let Some(c) = self.cursor.advance() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            '[' => self.add_token(TokenKind::LeftBracket),
            ']' => self.add_token(TokenKind::RightBracket),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            ';' => self.add_token(TokenKind::Semicolon),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            '*' => self.add_token(TokenKind::Star),
            '%' => self.add_token(TokenKind::Percent),

            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),

            '&' | '|' => self.logical_operator(c),

            '/' => {
                if self.cursor.match_char('/') {
                    self.line_comment();
                } else if self.cursor.match_char('*') {
                    self.block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            '"' => self.string(),

            ' ' | '\r' | '\t' => {}
            '\n' => self.cursor.newline(),

            c if c.is_ascii_digit() => self.number(),
            c if is_ident_start(c) => self.identifier(),

            c => self.report(DiagnosticKind::UnexpectedCharacter(c)),
        }
    }

    /// Emits `matched` if the next character is `expected`, `otherwise` if not.
    fn add_either(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) {
        let kind = if self.cursor.match_char(expected) {
            matched
        } else {
            otherwise
        };
        self.add_token(kind);
    }

    /// `&&` and `||`. The single-character forms are reserved.
    fn logical_operator(&mut self, c: char) {
        if self.cursor.match_char(c) {
            let kind = if c == '&' { TokenKind::And } else { TokenKind::Or };
            self.add_token(kind);
        } else {
            self.report(DiagnosticKind::UnsupportedBitwiseOperator(c));
        }
    }

    fn line_comment(&mut self) {
        while self.cursor.peek().is_some_and(|c| c != '\n') {
            self.cursor.advance();
        }
    }

    /// Skips a `/* ... */` comment. Comments do not nest.
    fn block_comment(&mut self) {
        loop {
            match self.cursor.advance() {
                None => {
                    self.report(DiagnosticKind::UnterminatedBlockComment);
                    return;
                }
                Some('*') if self.cursor.match_char('/') => return,
                Some('\n') => self.cursor.newline(),
                Some(_) => {}
            }
        }
    }

    /// Scans a string literal. The opening quote has already been consumed.
    fn string(&mut self) {
        while let Some(c) = self.cursor.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.cursor.newline();
            }
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            self.report(DiagnosticKind::UnterminatedString);
            return;
        }

        // The closing quote.
        self.cursor.advance();

        let lexeme = self.cursor.lexeme();
        let value = &lexeme[1..lexeme.len() - 1];
        self.add_literal(TokenKind::String, Literal::Text(value.to_string()));
    }

    fn number(&mut self) {
        self.consume_digits();

        if self.cursor.peek() == Some('.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance(); // .
            self.consume_digits();
        }

        let value = self.cursor.lexeme().parse().unwrap_or(0.0);
        self.add_literal(TokenKind::Number, Literal::Number(value));
    }

    fn consume_digits(&mut self) {
        while self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
        }
    }

    fn identifier(&mut self) {
        while self.cursor.peek().is_some_and(is_ident_continue) {
            self.cursor.advance();
        }

        let kind = TokenKind::keyword(self.cursor.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal(kind, Literal::None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        self.tokens.push(Token::new(
            kind,
            self.cursor.lexeme(),
            literal,
            self.cursor.line(),
            self.cursor.span(),
        ));
    }

    fn report(&mut self, kind: DiagnosticKind) {
        let line = self.cursor.line();
        tracing::trace!(line, kind = ?kind, "lexical error");
        self.diagnostics.push(Diagnostic::new(kind, line));
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
