use codemap::Spanned;

use crate::{
    ast::{MixinCall, MixinParameters, Rule, RuleKind},
    error::{ErrorCategory, LessResult},
    serializer,
};

use super::{Binding, Bindings, Scope, Visitor};

/// Mixins calling mixins deeper than this are assumed to never terminate
const MAX_MIXIN_DEPTH: usize = 100;

impl<'a> Visitor<'a> {
    /// Append the declarations of the mixin `call` refers to. An unknown
    /// mixin produces a warning and nothing else.
    pub(super) fn expand_mixin(
        &mut self,
        call: &MixinCall,
        scope: &Scope,
        declarations: &mut Vec<serializer::Declaration>,
    ) -> LessResult<()> {
        let (rule, home) = match scope.resolve_mixin(&call.name) {
            Some(found) => found,
            None => {
                self.emit_warning(
                    &format!("Mixin {} is not defined; the call is ignored.", call.name),
                    call.span,
                );
                return Ok(());
            }
        };

        if self.mixin_depth >= MAX_MIXIN_DEPTH {
            return Err((
                format!(
                    "Mixin {} is nested more than {} calls deep.",
                    call.name, MAX_MIXIN_DEPTH
                ),
                call.span,
                ErrorCategory::Recursion,
            )
                .into());
        }

        let bindings = match &rule.kind {
            RuleKind::Mixin(params) => self.bind_parameters(call, rule, params, scope)?,
            RuleKind::Style | RuleKind::AtRule(..) | RuleKind::Directive(..) => Bindings::new(),
        };

        let body = Scope::mixin(&rule.block, &bindings, &home);

        self.mixin_depth += 1;
        let expanded = self.declarations(&rule.block, &body);
        self.mixin_depth -= 1;

        declarations.extend(expanded?);

        Ok(())
    }

    /// Pair each parameter with the argument in the same position. Arguments
    /// are evaluated where the call is; defaults are left raw and evaluated
    /// inside the mixin, where they can see earlier parameters.
    fn bind_parameters(
        &mut self,
        call: &MixinCall,
        rule: &Rule,
        params: &MixinParameters,
        caller: &Scope,
    ) -> LessResult<Bindings> {
        let mut bindings = Bindings::new();

        for (idx, (name, default)) in params.iter().enumerate() {
            let arg = call.args.get(idx).filter(|arg| !arg.node.is_empty());

            let value = match (arg, default) {
                (Some(arg), _) => Binding::Argument(Spanned {
                    node: self.evaluate(arg, caller)?,
                    span: arg.span,
                }),
                (None, Some(default)) => Binding::Default(default.clone()),
                (None, None) => {
                    return Err((
                        format!(
                            "Missing argument for parameter @{} of mixin {}.",
                            name,
                            rule.name()
                        ),
                        call.span,
                        ErrorCategory::MissingParameter,
                    )
                        .into())
                }
            };

            bindings.insert(*name, value);
        }

        Ok(bindings)
    }
}
