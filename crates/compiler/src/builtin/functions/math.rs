use crate::{builtin::builtin_imports::*, utils::round_to};

/// Normalize every argument against one shared unit. Colors have no place in
/// these functions.
fn numbers(args: &ArgumentResult) -> LessResult<(Vec<f64>, Unit)> {
    if args.is_empty() {
        return Err(args.error(format!("{}() requires at least one argument.", args.name)));
    }

    let mut unit = SharedUnit::default();
    let mut nums = Vec::with_capacity(args.len());

    for value in &args.positional {
        match unit.normalize(value, args.span)? {
            Normalized::Number(n) => nums.push(n),
            Normalized::Color(..) => {
                return Err(args.error(format!(
                    "{}() expects numbers, found color \"{}\".",
                    args.name, value
                )))
            }
        }
    }

    Ok((nums, unit.unit()))
}

fn single_number(args: &ArgumentResult) -> LessResult<(f64, Unit)> {
    let mut unit = SharedUnit::default();

    match unit.normalize(args.get_err(0, "number")?, args.span)? {
        Normalized::Number(n) => Ok((n, unit.unit())),
        Normalized::Color(color) => Err(args.error(format!(
            "{}() expects a number, found color \"{}\".",
            args.name, color
        ))),
    }
}

pub(crate) fn min(args: ArgumentResult, visitor: &mut Visitor) -> LessResult<Value> {
    let (nums, unit) = numbers(&args)?;
    let min = nums.into_iter().fold(f64::INFINITY, f64::min);

    Ok(Value::new_number(min, unit))
}

pub(crate) fn max(args: ArgumentResult, visitor: &mut Visitor) -> LessResult<Value> {
    let (nums, unit) = numbers(&args)?;
    let max = nums.into_iter().fold(f64::NEG_INFINITY, f64::max);

    Ok(Value::new_number(max, unit))
}

pub(crate) fn avg(args: ArgumentResult, visitor: &mut Visitor) -> LessResult<Value> {
    let (nums, unit) = numbers(&args)?;
    let avg = nums.iter().sum::<f64>() / nums.len() as f64;

    Ok(Value::new_number(avg, unit))
}

pub(crate) fn ceil(args: ArgumentResult, visitor: &mut Visitor) -> LessResult<Value> {
    let (num, unit) = single_number(&args)?;

    Ok(Value::new_number(num.ceil(), unit))
}

pub(crate) fn floor(args: ArgumentResult, visitor: &mut Visitor) -> LessResult<Value> {
    let (num, unit) = single_number(&args)?;

    Ok(Value::new_number(num.floor(), unit))
}

/// `round(number[, places])`
pub(crate) fn round(args: ArgumentResult, visitor: &mut Visitor) -> LessResult<Value> {
    let (num, unit) = single_number(&args)?;

    let places = args
        .get(1)
        .map_or(0.0, |places| leading_float(&places.to_css_string()));

    // past 15 places an f64 has no digits left to round
    let places = places.clamp(0.0, 15.0) as i32;

    Ok(Value::new_number(round_to(num, places), unit))
}
