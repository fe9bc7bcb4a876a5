use codemap::Spanned;
use indexmap::IndexMap;

use crate::{
    ast::{Block, Import, Rule},
    common::Identifier,
};

/// The parameters of one mixin call
pub(crate) type Bindings = IndexMap<Identifier, Binding>;

#[derive(Debug, Clone)]
pub(crate) enum Binding {
    /// An argument, already evaluated where the call is
    Argument(Spanned<String>),
    /// A parameter default, evaluated inside the mixin so that it can refer
    /// to earlier parameters
    Default(Spanned<String>),
}

/// What a variable lookup found
#[derive(Debug, Clone, Copy)]
pub(crate) enum Variable<'a> {
    /// Final text, never evaluated again
    Evaluated(&'a str),
    /// A raw value along with the scope it has to be evaluated in
    Raw(&'a Spanned<String>, Scope<'a>),
}

/// A view of one block during evaluation, linked to the scope it is nested in.
///
/// Scopes are borrowed from the document and never mutated. A mixin call
/// layers its bindings over the mixin's own block instead of writing the
/// arguments into it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scope<'a> {
    block: &'a Block,
    bindings: Option<&'a Bindings>,
    parent: Option<&'a Scope<'a>>,
}

impl<'a> Scope<'a> {
    pub fn root(block: &'a Block) -> Self {
        Scope {
            block,
            bindings: None,
            parent: None,
        }
    }

    pub fn child<'b>(&'b self, block: &'b Block) -> Scope<'b> {
        Scope {
            block,
            bindings: None,
            parent: Some(self),
        }
    }

    /// The body of a mixin, with its arguments bound, nested in the scope the
    /// mixin was defined in
    pub fn mixin<'b>(
        block: &'b Block,
        bindings: &'b Bindings,
        home: &'b Scope<'b>,
    ) -> Scope<'b> {
        Scope {
            block,
            bindings: Some(bindings),
            parent: Some(home),
        }
    }

    /// Find the value of a variable. A raw value comes with the scope it was
    /// defined in, which is where it has to be evaluated.
    ///
    /// Each scope is searched in order: mixin bindings, the block's own
    /// variables, then its imports. Then the parent scope is searched.
    pub fn resolve_variable(&self, name: Identifier) -> Option<Variable<'a>> {
        let mut scope = *self;

        loop {
            if let Some(found) = scope.local_variable(name) {
                return Some(found);
            }

            if let Some(found) = scope.imported_variable(name) {
                return Some(found);
            }

            scope = *scope.parent?;
        }
    }

    fn local_variable(&self, name: Identifier) -> Option<Variable<'a>> {
        if let Some(binding) = self.bindings.and_then(|bindings| bindings.get(&name)) {
            return Some(match binding {
                Binding::Argument(value) => Variable::Evaluated(&value.node),
                Binding::Default(value) => Variable::Raw(value, *self),
            });
        }

        self.block
            .variables
            .get(&name)
            .map(|value| Variable::Raw(value, *self))
    }

    fn imported_variable(&self, name: Identifier) -> Option<Variable<'a>> {
        self.block.imports.iter().find_map(|import| match import {
            Import::Stylesheet(document) => Scope::root(&document.block).resolve_variable(name),
            Import::Css(..) => None,
        })
    }

    /// Find the rule a mixin call refers to, along with the scope it is
    /// defined in
    pub fn resolve_mixin(&self, name: &str) -> Option<(&'a Rule, Scope<'a>)> {
        let mut scope = *self;

        loop {
            if let Some(rule) = scope
                .block
                .children
                .iter()
                .find(|rule| rule.answers_to(name))
            {
                return Some((rule, scope));
            }

            let imported = scope.block.imports.iter().find_map(|import| match import {
                Import::Stylesheet(document) => Scope::root(&document.block).resolve_mixin(name),
                Import::Css(..) => None,
            });

            if imported.is_some() {
                return imported;
            }

            scope = *scope.parent?;
        }
    }
}
