use std::path::{Path, PathBuf};

use codemap::{Span, Spanned};
use indexmap::IndexMap;

use crate::common::Identifier;

/// A parsed stylesheet. Its block is the root scope: top-level variables,
/// imports and rules live here.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) path: PathBuf,
    pub block: Block,
}

impl Document {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every top-level rule, including mixin definitions and at-rules
    pub fn rules(&self) -> &[Rule] {
        &self.block.children
    }

    /// The unevaluated text of a top-level variable
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.block
            .variables
            .get(&Identifier::from(name))
            .map(|value| value.node.as_str())
    }
}

/// The contents of a pair of braces (or of a whole file)
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub imports: Vec<Import>,

    /// Raw, unevaluated variable values. Redefinition replaces the value in
    /// place, so the first definition decides the position.
    pub variables: IndexMap<Identifier, Spanned<String>>,

    /// Properties and mixin calls, in source order
    pub declarations: Vec<Declaration>,

    pub children: Vec<Rule>,
}

impl Block {
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Property(property) => Some(property),
            Declaration::MixinCall(..) => None,
        })
    }

    pub fn mixin_calls(&self) -> impl Iterator<Item = &MixinCall> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::MixinCall(call) => Some(call),
            Declaration::Property(..) => None,
        })
    }
}

#[derive(Debug, Clone)]
pub enum Import {
    /// A parsed `.less` file
    Stylesheet(Box<Document>),

    /// The contents of a `.css` file, emitted as is
    Css(String),
}

/// A selector (or at-rule prelude) with a block
#[derive(Debug, Clone)]
pub struct Rule {
    /// Selectors with those of the enclosing rules folded in. Top-level
    /// at-rules have none; nested at-rules carry their parent's.
    pub selectors: Vec<String>,

    /// Selectors exactly as written on this rule
    pub own_selectors: Vec<String>,

    pub kind: RuleKind,

    pub condition: Option<Conditional>,

    pub block: Block,

    pub span: Span,
}

impl Rule {
    pub fn is_mixin(&self) -> bool {
        matches!(self.kind, RuleKind::Mixin(..))
    }

    /// The first selector as written, e.g. `.bordered` or `@media print`
    pub fn name(&self) -> &str {
        match &self.kind {
            RuleKind::AtRule(name) | RuleKind::Directive(name) => name.as_str(),
            RuleKind::Style | RuleKind::Mixin(..) => self
                .own_selectors
                .first()
                .map_or("", String::as_str),
        }
    }

    /// Whether `.name;` or `.name(...)` would expand this rule
    pub(crate) fn answers_to(&self, mixin: &str) -> bool {
        match self.kind {
            RuleKind::Mixin(..) | RuleKind::Style => {
                self.own_selectors.iter().any(|selector| selector == mixin)
            }
            RuleKind::AtRule(..) | RuleKind::Directive(..) => false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum RuleKind {
    Style,

    /// `.name(@a; @b: default) { ... }`. Never emitted on its own.
    Mixin(MixinParameters),

    /// `@media ...`, `@font-face` and other at-rules with a block. Holds the
    /// prelude with whitespace collapsed.
    AtRule(String),

    /// A bodiless at-rule such as `@charset "UTF-8"`, written back followed
    /// by `;`
    Directive(String),
}

/// Parameter names in declaration order, with their raw default values
pub type MixinParameters = IndexMap<Identifier, Option<Spanned<String>>>;

#[derive(Debug, Clone)]
pub enum Declaration {
    Property(Property),
    MixinCall(MixinCall),
}

#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub value: Spanned<String>,
}

#[derive(Debug, Clone)]
pub struct MixinCall {
    /// The selector being invoked, including its leading `.`
    pub name: String,

    /// Raw argument text, in order. Blank arguments fall back to the
    /// parameter's default.
    pub args: Vec<Spanned<String>>,

    pub span: Span,
}

/// A condition attached to a rule's selector
#[derive(Debug, Clone)]
pub enum Conditional {
    If(Spanned<String>),
    ElseIf(Spanned<String>),
    Else,
}
