//! Character cursor used by the scanner.

use crate::Span;

/// A position in the source text plus the start of the lexeme being recognized.
///
/// Offsets are byte offsets that always sit on `char` boundaries, with
/// `start <= current <= source.len()`.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Start of the current lexeme.
    start: usize,
    /// Next byte to be consumed.
    current: usize,
    /// 1-based line of `current`.
    line: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Marks the current position as the start of a new lexeme.
    pub fn begin_lexeme(&mut self) {
        self.start = self.current;
    }

    /// Consumes and returns the next character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    /// Returns the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the character after the next one without consuming anything.
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Consumes the next character if it is `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Records that a newline was consumed.
    pub fn newline(&mut self) {
        self.line += 1;
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// The text of the lexeme recognized so far.
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    /// The byte range of the lexeme recognized so far.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.current)
    }

    fn rest(&self) -> &'a str {
        &self.source[self.current..]
    }
}
