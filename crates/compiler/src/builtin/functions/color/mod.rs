use crate::builtin::builtin_imports::*;

fn color_arg(args: &ArgumentResult) -> LessResult<Color> {
    let value = args.get_err(0, "color")?;

    match SharedUnit::color().normalize(value, args.span)? {
        Normalized::Color(color) => Ok(color),
        Normalized::Number(..) => Err(args.error(format!(
            "{}() expects a color, found \"{}\".",
            args.name, value
        ))),
    }
}

fn amount_arg(args: &ArgumentResult) -> LessResult<f64> {
    let value = args.get_err(1, "amount")?;

    match SharedUnit::of(Unit::Percent).normalize(value, args.span)? {
        Normalized::Number(n) => Ok(n),
        Normalized::Color(..) => Err(args.error(format!(
            "{}() expects a percentage, found color \"{}\".",
            args.name, value
        ))),
    }
}

pub(crate) fn lighten(args: ArgumentResult, visitor: &mut Visitor) -> LessResult<Value> {
    let color = color_arg(&args)?;
    let amount = amount_arg(&args)?;

    Ok(Value::Color(color.adjust_value(amount)))
}

pub(crate) fn darken(args: ArgumentResult, visitor: &mut Visitor) -> LessResult<Value> {
    let color = color_arg(&args)?;
    let amount = amount_arg(&args)?;

    Ok(Value::Color(color.adjust_value(-amount)))
}

pub(crate) fn greyscale(args: ArgumentResult, visitor: &mut Visitor) -> LessResult<Value> {
    Ok(Value::Color(color_arg(&args)?.greyscale()))
}
