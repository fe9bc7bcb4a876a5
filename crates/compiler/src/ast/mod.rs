pub(crate) use expr::*;
pub use stmt::*;

mod expr;
mod stmt;
