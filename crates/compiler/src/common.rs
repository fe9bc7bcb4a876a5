use std::fmt::{self, Display};

use crate::interner::InternedString;

/// The name of a variable, mixin or mixin parameter, without its sigil
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(InternedString);

impl Identifier {
    pub fn as_string(self) -> String {
        self.0.resolve()
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier(InternedString::get_or_intern(s))
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Identifier(InternedString::get_or_intern(s))
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({:?})", self.as_string())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    Mul,
    Div,
    Plus,
    Minus,
}

impl BinaryOp {
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '*' => Self::Mul,
            '/' => Self::Div,
            '+' => Self::Plus,
            '-' => Self::Minus,
            _ => return None,
        })
    }

    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Plus => left + right,
            Self::Minus => left - right,
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Plus => "+",
            Self::Minus => "-",
        })
    }
}

/// The comparison operators understood by `if()` and `@if`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Comparison {
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Equal,
    NotEqual,
}

impl Comparison {
    /// Longest operators first, so that `>=` is not read as `>`
    pub(crate) const SPELLINGS: [(&'static str, Comparison); 7] = [
        (">=", Self::GreaterThanOrEqual),
        ("<=", Self::LessThanOrEqual),
        ("==", Self::Equal),
        ("!=", Self::NotEqual),
        (">", Self::GreaterThan),
        ("<", Self::LessThan),
        ("=", Self::Equal),
    ];

    pub fn holds<T: PartialOrd>(self, left: &T, right: &T) -> bool {
        match self {
            Self::GreaterThan => left > right,
            Self::GreaterThanOrEqual => left >= right,
            Self::LessThan => left < right,
            Self::LessThanOrEqual => left <= right,
            Self::Equal => left == right,
            Self::NotEqual => left != right,
        }
    }
}
