//! Lexical diagnostics.

use thiserror::Error;

/// The kind of lexical error the scanner encountered.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),

    #[error("Unterminated string.")]
    UnterminatedString,

    /// A lone `&` or `|`. The single forms are reserved for bitwise operators.
    #[error("Bitwise operators are not yet implemented.")]
    UnsupportedBitwiseOperator(char),

    #[error("Unterminated block comment.")]
    UnterminatedBlockComment,
}

/// A non-fatal lexical error tied to a source line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("[line {line}] Error{location}: {kind}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: u32,
    /// Extra context rendered after "Error", such as " at 'x'". Empty for now.
    pub location: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: u32) -> Self {
        Self {
            kind,
            line,
            location: String::new(),
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
