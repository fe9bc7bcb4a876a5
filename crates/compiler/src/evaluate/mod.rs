pub(crate) use bin_op::operate;
pub(crate) use scope::{Binding, Bindings, Scope, Variable};
pub use visitor::Visitor;

mod bin_op;
mod conditional;
mod expression;
mod mixin;
mod scope;
mod visitor;
