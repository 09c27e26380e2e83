//! Lexical analyzer for the Ori scripting language.
//!
//! This crate turns Ori source text into a sequence of [`Token`]s, collecting
//! a [`Diagnostic`] for every lexeme it cannot recognize instead of stopping.
//!
//! ```ignore
//! let scanned = ori_lexer::scan_tokens("print 1 + 2;");
//! assert!(scanned.diagnostics.is_empty());
//! ```

mod cursor;
mod diagnostic;
mod scanner;
mod span;
mod token;

pub use cursor::Cursor;
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use scanner::{scan_tokens, Scanned, Scanner};
pub use span::Span;
pub use token::{Literal, Token, TokenKind};
