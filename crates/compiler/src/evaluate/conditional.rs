use codemap::Spanned;

use crate::{
    ast::{Conditional, Rule},
    builtin::compare,
    error::LessResult,
};

use super::{Scope, Visitor};

/// What to do with the next sibling rule
#[derive(Debug)]
pub(super) enum Branch<'r> {
    Emit,
    Skip,
    /// Evaluate the condition; the outcome decides and must be recorded
    Test(&'r Spanned<String>),
    /// `@elseif` or `@else` with no `@if` before it
    Orphan(&'static str),
}

/// The state of an `@if` / `@elseif` / `@else` chain among siblings.
///
/// `Some(true)` once a branch of the current chain has been taken,
/// `Some(false)` while every branch so far was false and `None` outside a
/// chain. Any rule without a condition ends the chain.
#[derive(Debug, Default)]
pub(super) struct IfChain {
    taken: Option<bool>,
}

impl IfChain {
    pub fn branch<'r>(&mut self, rule: &'r Rule) -> Branch<'r> {
        match (&rule.condition, self.taken) {
            (None, _) => {
                self.taken = None;
                Branch::Emit
            }
            (Some(Conditional::If(condition)), _) => Branch::Test(condition),
            (Some(Conditional::ElseIf(..)), None) => {
                Branch::Orphan("@elseif without a preceding @if is ignored.")
            }
            (Some(Conditional::ElseIf(..)), Some(true)) => Branch::Skip,
            (Some(Conditional::ElseIf(condition)), Some(false)) => Branch::Test(condition),
            (Some(Conditional::Else), None) => {
                Branch::Orphan("@else without a preceding @if is ignored.")
            }
            (Some(Conditional::Else), Some(taken)) => {
                self.taken = None;
                if taken {
                    Branch::Skip
                } else {
                    Branch::Emit
                }
            }
        }
    }

    pub fn record(&mut self, outcome: bool) {
        self.taken = Some(outcome);
    }
}

impl<'a> Visitor<'a> {
    /// Evaluate `condition` in the scope the conditional rule is declared in.
    /// A condition that is not `<lhs> <op> <rhs>` is false.
    pub(super) fn test_condition(
        &mut self,
        condition: &Spanned<String>,
        scope: &Scope,
    ) -> LessResult<bool> {
        let text = self.evaluate(condition, scope)?;

        match compare(&text, condition.span)? {
            Some(outcome) => Ok(outcome),
            None => {
                self.emit_warning(
                    &format!("Malformed condition \"{}\" is treated as false.", text),
                    condition.span,
                );
                Ok(false)
            }
        }
    }
}
