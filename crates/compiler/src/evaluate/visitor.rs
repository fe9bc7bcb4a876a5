use std::collections::HashSet;

use codemap::{CodeMap, Span};

use crate::{
    ast::{Block, Declaration, Document, Import, Rule, RuleKind},
    common::Identifier,
    error::LessResult,
    logger::Diagnostics,
    serializer::{self, Serializer},
    Options,
};

use super::{
    conditional::{Branch, IfChain},
    Scope,
};

/// Walks a parsed [`Document`] and writes CSS.
///
/// Nothing is evaluated ahead of time: each property value is evaluated in
/// the scope of the block that declares it, when that block is written out.
/// Mixin calls are expanded at the same point, so a mixin may be defined
/// after it is used.
pub struct Visitor<'a> {
    pub(crate) map: &'a CodeMap,
    diagnostics: Diagnostics<'a>,
    // variables currently being evaluated, keyed by the span of their
    // definition, to catch `@a: @b; @b: @a;`
    pub(super) resolving: Vec<(Identifier, Span)>,
    pub(super) mixin_depth: usize,
    // avoid emitting duplicate warnings for the same span
    warnings_emitted: HashSet<Span>,
    serializer: Serializer,
}

impl std::fmt::Debug for Visitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Visitor")
            .field("mixin_depth", &self.mixin_depth)
            .finish_non_exhaustive()
    }
}

impl<'a> Visitor<'a> {
    pub(crate) fn new(options: &'a Options<'a>, map: &'a CodeMap) -> Self {
        Self {
            map,
            diagnostics: options.diagnostics(),
            resolving: Vec::new(),
            mixin_depth: 0,
            warnings_emitted: HashSet::new(),
            serializer: Serializer::new(),
        }
    }

    /// Imports are written first, in the order they were declared, then the
    /// document's own rules
    pub(crate) fn visit_document(&mut self, document: &Document) -> LessResult<()> {
        for import in &document.block.imports {
            match import {
                Import::Stylesheet(imported) => self.visit_document(imported)?,
                Import::Css(css) => self.serializer.write_raw_css(css),
            }
        }

        let scope = Scope::root(&document.block);
        self.visit_rules(&document.block.children, &scope)
    }

    pub(crate) fn finish(self) -> LessResult<String> {
        self.serializer.finish()
    }

    pub(crate) fn emit_warning(&mut self, message: &str, span: Span) {
        if self.warnings_emitted.insert(span) {
            self.diagnostics.warn(self.map, span, message);
        }
    }

    /// Write every rule of a block. `scope` is the scope of that block.
    fn visit_rules(&mut self, rules: &[Rule], scope: &Scope) -> LessResult<()> {
        let mut chain = IfChain::default();

        for rule in rules {
            if !self.admit(&mut chain, rule, scope)? {
                continue;
            }

            match &rule.kind {
                RuleKind::Mixin(..) => {}
                RuleKind::Directive(text) => self.serializer.write_directive(text),
                RuleKind::Style => self.visit_style_rule(rule, scope)?,
                RuleKind::AtRule(prelude) => self.visit_at_rule(prelude, rule, scope)?,
            }
        }

        Ok(())
    }

    fn visit_style_rule(&mut self, rule: &Rule, parent: &Scope) -> LessResult<()> {
        let scope = parent.child(&rule.block);
        let declarations = self.declarations(&rule.block, &scope)?;

        if !declarations.is_empty() && !rule.selectors.is_empty() {
            self.serializer
                .write_style_rule(&rule.selectors, &declarations)?;
        }

        self.visit_rules(&rule.block.children, &scope)
    }

    /// An at-rule wraps the output of its body. Its own declarations belong
    /// to the selectors it is nested in, if any.
    fn visit_at_rule(&mut self, prelude: &str, rule: &Rule, parent: &Scope) -> LessResult<()> {
        let scope = parent.child(&rule.block);
        let declarations = self.declarations(&rule.block, &scope)?;

        if rule.selectors.is_empty() && rule.block.children.is_empty() {
            if !declarations.is_empty() {
                self.serializer
                    .write_inline_at_rule(prelude, &declarations)?;
            }
            return Ok(());
        }

        let mark = self.serializer.open_block(prelude);

        if !declarations.is_empty() {
            if rule.selectors.is_empty() {
                self.serializer.write_bare_declarations(&declarations)?;
            } else {
                self.serializer
                    .write_style_rule(&rule.selectors, &declarations)?;
            }
        }

        self.visit_rules(&rule.block.children, &scope)?;
        self.serializer.close_block(mark);

        Ok(())
    }

    /// Evaluate the properties of a block, expanding mixin calls in place
    pub(super) fn declarations(
        &mut self,
        block: &Block,
        scope: &Scope,
    ) -> LessResult<Vec<serializer::Declaration>> {
        let mut declarations = Vec::new();

        for declaration in &block.declarations {
            match declaration {
                Declaration::Property(property) => {
                    let value = self.evaluate(&property.value, scope)?;
                    declarations.push((property.name.clone(), value));
                }
                Declaration::MixinCall(call) => {
                    self.expand_mixin(call, scope, &mut declarations)?;
                }
            }
        }

        Ok(declarations)
    }

    /// Whether a rule takes part in the output, given the `@if` chain it may
    /// belong to
    fn admit(&mut self, chain: &mut IfChain, rule: &Rule, scope: &Scope) -> LessResult<bool> {
        Ok(match chain.branch(rule) {
            Branch::Emit => true,
            Branch::Skip => false,
            Branch::Orphan(message) => {
                self.emit_warning(message, rule.span);
                false
            }
            Branch::Test(condition) => {
                let outcome = self.test_condition(condition, scope)?;
                chain.record(outcome);
                outcome
            }
        })
    }
}
