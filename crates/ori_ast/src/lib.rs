//! Expression tree definitions for the Ori scripting language.
//!
//! Trees are built bottom-up and never mutated. New whole-tree operations are
//! added by implementing [`ExprVisitor`], or by matching on [`Expr`] directly.

mod expr;
mod printer;
mod visitor;

pub use expr::Expr;
pub use printer::{print, AstPrinter};
pub use visitor::ExprVisitor;
