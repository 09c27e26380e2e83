//! Run driver for the Ori front end.
//!
//! The driver feeds whole sources to the scanner and keeps the diagnostics of
//! every run in a [`Session`]:
//!
//! ```text
//! Source → Scanner → Tokens + Diagnostics → Session → output
//! ```
//!
//! # Example
//!
//! ```ignore
//! use ori_driver::{RunOptions, Session};
//!
//! let mut session = Session::new(RunOptions::quiet());
//! let scanned = session.run("print 1;");
//! session.finish()?;
//! ```

mod error;
mod session;

pub use error::*;
pub use session::*;

// Re-export commonly used types from dependencies
pub use ori_lexer::{Diagnostic, Scanned, Token};
