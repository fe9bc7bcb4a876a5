use std::fmt::{self, Display};

use crate::common::BinaryOp;

/// One lexical piece of a property or variable value
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ValueToken {
    /// Whitespace between two terms, collapsed to a single space
    Space,

    /// A comma, and whether whitespace followed it
    Comma { spaced: bool },

    /// An arithmetic operator with whitespace on both sides
    Op(BinaryOp),

    /// A number, hex color, keyword, quoted string or any other run of
    /// characters up to the next separator
    Word(String),

    /// `@name`
    Variable(String),

    /// `name(...)`, with no space before the parenthesis
    Call { name: String, args: Vec<ValueToken> },

    /// `(...)` not directly preceded by a name
    Group(Vec<ValueToken>),
}

impl Display for ValueToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueToken::Space => f.write_str(" "),
            ValueToken::Comma { spaced: true } => f.write_str(", "),
            ValueToken::Comma { spaced: false } => f.write_str(","),
            ValueToken::Op(op) => write!(f, " {} ", op),
            ValueToken::Word(word) => f.write_str(word),
            ValueToken::Variable(name) => write!(f, "@{}", name),
            ValueToken::Call { name, args } => {
                write!(f, "{}(", name)?;
                for arg in args {
                    arg.fmt(f)?;
                }
                f.write_str(")")
            }
            ValueToken::Group(inner) => {
                f.write_str("(")?;
                for token in inner {
                    token.fmt(f)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Writes a run of tokens back out as text
pub(crate) fn tokens_to_string(tokens: &[ValueToken]) -> String {
    tokens.iter().map(ToString::to_string).collect()
}

/// A value after operator precedence has been applied
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    /// Terms and the separators between them. Adjacent terms with no
    /// separator are written back to back.
    List(Vec<ListItem>),
    Word(String),
    Call {
        name: String,
        args: Vec<ValueToken>,
    },
    Group(Vec<ValueToken>),
    BinaryOp(Box<Expr>, BinaryOp, Box<Expr>),
    /// The missing side of an operator, e.g. the left side of `* 2`
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ListItem {
    Expr(Expr),
    Separator(ValueToken),
}
