use codemap::Span;

use crate::{
    color::Color,
    common::BinaryOp,
    error::{ErrorCategory, LessResult},
    unit::Unit,
    utils::round_to,
    value::Value,
};

/// An operand after classification
#[derive(Debug, Clone)]
enum Operand {
    Color(Color),
    /// A plain number, percentages already divided by 100
    Number(f64),
}

/// What the operands of one operation have agreed on so far
#[derive(Debug, Default)]
struct OperandUnits {
    color: bool,
    unit: Option<Unit>,
    percent: bool,
}

impl OperandUnits {
    fn classify(&mut self, value: &Value, span: Span) -> LessResult<Option<Operand>> {
        Ok(Some(match value {
            Value::Color(color) => {
                if let Some(unit) = &self.unit {
                    return Err(mixing_units(&unit.to_string(), "color", span));
                }
                self.color = true;
                Operand::Color(color.clone())
            }
            Value::Dimension(n) => match &n.unit {
                Unit::None => Operand::Number(n.num),
                Unit::Percent => {
                    self.percent = true;
                    Operand::Number(n.num / 100.0)
                }
                unit => {
                    if self.color {
                        return Err(mixing_units("color", &unit.to_string(), span));
                    }
                    if let Some(existing) = &self.unit {
                        if existing != unit {
                            return Err(mixing_units(
                                &existing.to_string(),
                                &unit.to_string(),
                                span,
                            ));
                        }
                    }
                    self.unit = Some(unit.clone());
                    Operand::Number(n.num)
                }
            },
            Value::String(s) if s.trim().is_empty() => Operand::Number(0.0),
            Value::String(s) if s.starts_with('#') => {
                return Err((
                    format!("Invalid color format inside expression \"{}\".", s),
                    span,
                    ErrorCategory::InvalidColor,
                )
                    .into())
            }
            Value::String(..) => return Ok(None),
        }))
    }
}

fn mixing_units(first: &str, second: &str, span: Span) -> Box<crate::error::LessError> {
    (
        format!(
            "Mixing units inside expression (\"{}\" and \"{}\").",
            first, second
        ),
        span,
        ErrorCategory::UnitMismatch,
    )
        .into()
}

/// Apply `op` to two evaluated operands.
///
/// Returns `None` when either side is not something we can compute with, or
/// on division by zero; the caller then keeps the expression as written.
pub(crate) fn operate(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    span: Span,
) -> LessResult<Option<Value>> {
    let mut units = OperandUnits::default();

    let left = match units.classify(left, span)? {
        Some(operand) => operand,
        None => return Ok(None),
    };
    let right = match units.classify(right, span)? {
        Some(operand) => operand,
        None => return Ok(None),
    };

    let divides_by_zero = op == BinaryOp::Div
        && match &right {
            Operand::Number(n) => *n == 0.0,
            Operand::Color(c) => c.channels().contains(&0.0),
        };
    if divides_by_zero {
        return Ok(None);
    }

    Ok(Some(match (left, right) {
        (Operand::Number(a), Operand::Number(b)) => {
            let result = op.apply(a, b);
            match units.unit {
                Some(unit) => Value::new_number(result, unit),
                None if units.percent => Value::new_number(round_to(result * 100.0, 2), Unit::Percent),
                None => Value::new_number(result, Unit::None),
            }
        }
        (Operand::Color(a), Operand::Color(b)) => {
            let alpha = match (a.alpha(), b.alpha()) {
                (None, None) => None,
                (x, y) => Some(op.apply(x.unwrap_or(1.0), y.unwrap_or(1.0))),
            };
            color_from(
                channels_with(a.channels(), b.channels(), |x, y| op.apply(x, y)),
                alpha,
            )
        }
        (Operand::Color(a), Operand::Number(b)) => color_from(
            channels_with(a.channels(), [b; 3], |x, y| op.apply(x, y)),
            a.alpha().map(|alpha| op.apply(alpha, b)),
        ),
        (Operand::Number(a), Operand::Color(b)) => color_from(
            channels_with([a; 3], b.channels(), |x, y| op.apply(x, y)),
            b.alpha().map(|alpha| op.apply(a, alpha)),
        ),
    }))
}

fn channels_with(a: [f64; 3], b: [f64; 3], f: impl Fn(f64, f64) -> f64) -> [f64; 3] {
    [f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2])]
}

fn color_from([red, green, blue]: [f64; 3], alpha: Option<f64>) -> Value {
    Value::Color(Color::new_rgba(
        red.clamp(0.0, 255.0),
        green.clamp(0.0, 255.0),
        blue.clamp(0.0, 255.0),
        alpha.map(|alpha| alpha.clamp(0.0, 1.0)),
    ))
}
