// A reference to the visitor is only necessary for some functions
#![allow(unused_variables)]

use codemap::Span;
use phf::phf_map;

use crate::{
    color::Color,
    error::{ErrorCategory, LessError, LessResult},
    evaluate::Visitor,
    unit::Unit,
    utils::leading_float,
    value::Value,
};

pub(crate) use meta::compare;

pub mod color;
pub mod math;
pub mod meta;

/// The functions evaluated at compile time. Any other `name(...)` is plain
/// CSS and is written out as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Builtin {
    If,
    Min,
    Max,
    Avg,
    Ceil,
    Floor,
    Round,
    Lighten,
    Darken,
    Greyscale,
}

pub(crate) static GLOBAL_FUNCTIONS: phf::Map<&'static str, Builtin> = phf_map! {
    "if" => Builtin::If,
    "min" => Builtin::Min,
    "max" => Builtin::Max,
    "avg" => Builtin::Avg,
    "ceil" => Builtin::Ceil,
    "floor" => Builtin::Floor,
    "round" => Builtin::Round,
    "lighten" => Builtin::Lighten,
    "darken" => Builtin::Darken,
    "greyscale" => Builtin::Greyscale,
};

impl Builtin {
    pub fn call(self, args: ArgumentResult, visitor: &mut Visitor) -> LessResult<Value> {
        let body: fn(ArgumentResult, &mut Visitor) -> LessResult<Value> = match self {
            Builtin::If => meta::if_,
            Builtin::Min => math::min,
            Builtin::Max => math::max,
            Builtin::Avg => math::avg,
            Builtin::Ceil => math::ceil,
            Builtin::Floor => math::floor,
            Builtin::Round => math::round,
            Builtin::Lighten => color::lighten,
            Builtin::Darken => color::darken,
            Builtin::Greyscale => color::greyscale,
        };

        body(args, visitor)
    }
}

/// The evaluated, comma separated arguments of a builtin call
#[derive(Debug, Clone)]
pub(crate) struct ArgumentResult {
    pub positional: Vec<Value>,
    pub name: &'static str,
    pub span: Span,
}

impl ArgumentResult {
    pub fn new(name: &'static str, positional: Vec<Value>, span: Span) -> Self {
        Self {
            positional,
            name,
            span,
        }
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Value> {
        self.positional.get(position)
    }

    pub fn get_err(&self, position: usize, name: &str) -> LessResult<&Value> {
        match self.get(position) {
            Some(value) => Ok(value),
            None => Err(self.error(format!("{}() is missing argument {}.", self.name, name))),
        }
    }

    pub fn error(&self, message: String) -> Box<LessError> {
        (message, self.span, ErrorCategory::InvalidArgument).into()
    }

    /// The call as written, for when it cannot be evaluated
    pub fn as_written(&self) -> Value {
        let args: Vec<String> = self.positional.iter().map(Value::to_css_string).collect();
        Value::String(format!("{}({})", self.name, args.join(", ")))
    }
}

/// A function argument reduced to something we can compute with
#[derive(Debug, Clone)]
pub(crate) enum Normalized {
    Number(f64),
    Color(Color),
}

#[derive(Debug, Clone, PartialEq)]
enum Expected {
    Color,
    Unit(Unit),
}

/// Tracks the one unit all arguments of a call must share. Unitless numbers
/// fit any unit; `%` counts as a unit of its own.
#[derive(Debug, Clone, Default)]
pub(crate) struct SharedUnit {
    expected: Option<Expected>,
}

impl SharedUnit {
    pub fn color() -> Self {
        Self {
            expected: Some(Expected::Color),
        }
    }

    pub fn of(unit: Unit) -> Self {
        Self {
            expected: Some(Expected::Unit(unit)),
        }
    }

    fn describe(expected: &Expected) -> String {
        match expected {
            Expected::Color => "color".to_owned(),
            Expected::Unit(unit) => unit.to_string(),
        }
    }

    fn agree(&mut self, found: Expected, span: Span) -> LessResult<()> {
        match &self.expected {
            Some(expected) if *expected != found => Err((
                format!(
                    "Calling function with several different units (\"{}\" and \"{}\").",
                    Self::describe(expected),
                    Self::describe(&found)
                ),
                span,
                ErrorCategory::UnitMismatch,
            )
                .into()),
            Some(..) => Ok(()),
            None => {
                self.expected = Some(found);
                Ok(())
            }
        }
    }

    pub fn normalize(&mut self, value: &Value, span: Span) -> LessResult<Normalized> {
        match value {
            Value::Color(color) => {
                self.agree(Expected::Color, span)?;
                Ok(Normalized::Color(color.clone()))
            }
            Value::Dimension(n) if n.unit.is_none() => Ok(Normalized::Number(n.num)),
            Value::Dimension(n) => {
                self.agree(Expected::Unit(n.unit.clone()), span)?;
                Ok(Normalized::Number(n.num))
            }
            Value::String(s) if s.starts_with('#') => Err((
                format!("Invalid color format inside function call \"{}\".", s),
                span,
                ErrorCategory::InvalidColor,
            )
                .into()),
            Value::String(s) => Ok(Normalized::Number(leading_float(s))),
        }
    }

    /// The unit a numeric result should carry
    pub fn unit(&self) -> Unit {
        match &self.expected {
            Some(Expected::Unit(unit)) => unit.clone(),
            Some(Expected::Color) | None => Unit::None,
        }
    }
}
