use std::fmt::{self, Display};

use crate::{color::Color, unit::Unit};

pub(crate) use less_number::LessNumber;

mod less_number;

/// The result of evaluating one term of a property value
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    Dimension(LessNumber),
    Color(Color),
    /// Anything we don't compute with: keywords, strings, unknown function
    /// calls, lists of terms. An empty string stands for a missing operand.
    String(String),
}

impl Value {
    /// Classify a single word of a value as written in the source
    pub fn from_word(word: &str) -> Self {
        if word.starts_with('#') {
            if let Some(color) = Color::from_hex(word) {
                return Value::Color(color);
            }
        } else if let Some(number) = LessNumber::parse(word) {
            return Value::Dimension(number);
        }

        Value::String(word.to_owned())
    }

    pub fn new_number(num: f64, unit: Unit) -> Self {
        Value::Dimension(LessNumber::new(num, unit))
    }

    pub fn to_css_string(&self) -> String {
        self.to_string()
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Dimension(n) => n.fmt(f),
            Value::Color(c) => c.fmt(f),
            Value::String(s) => f.write_str(s),
        }
    }
}
