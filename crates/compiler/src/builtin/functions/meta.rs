use crate::{builtin::builtin_imports::*, common::Comparison};

fn operand(text: &str) -> Value {
    Color::from_function(text).map_or_else(|| Value::from_word(text), Value::Color)
}

/// Evaluate a condition of the form `<lhs> <op> <rhs>`, where both sides are
/// single words.
///
/// Returns `None` when the text is not shaped like a condition. Both sides
/// are normalized against one shared unit, so `1px < 2em` is an error.
pub(crate) fn compare(text: &str, span: Span) -> LessResult<Option<bool>> {
    let op_start = match text.find(|c| matches!(c, '<' | '>' | '=' | '!')) {
        Some(idx) => idx,
        None => return Ok(None),
    };

    let (spelling, comparison) = match Comparison::SPELLINGS
        .iter()
        .find(|(spelling, _)| text[op_start..].starts_with(spelling))
    {
        Some(found) => *found,
        None => return Ok(None),
    };

    let lhs = text[..op_start].trim();
    let rhs = text[op_start + spelling.len()..].trim();

    if lhs.is_empty()
        || rhs.is_empty()
        || lhs.contains(char::is_whitespace)
        || rhs.contains(char::is_whitespace)
    {
        return Ok(None);
    }

    let mut unit = SharedUnit::default();
    let lhs = unit.normalize(&operand(lhs), span)?;
    let rhs = unit.normalize(&operand(rhs), span)?;

    Ok(Some(match (lhs, rhs) {
        (Normalized::Number(a), Normalized::Number(b)) => comparison.holds(&a, &b),
        (Normalized::Color(a), Normalized::Color(b)) => {
            comparison.holds(&a.components(), &b.components())
        }
        (Normalized::Color(..), Normalized::Number(..))
        | (Normalized::Number(..), Normalized::Color(..)) => {
            return Err((
                format!("Cannot compare a color with a number in \"{}\".", text),
                span,
                ErrorCategory::UnitMismatch,
            )
                .into())
        }
    }))
}

/// `if(condition, if-true[, if-false])`
///
/// A call that cannot be decided is written back as it was given.
pub(crate) fn if_(args: ArgumentResult, visitor: &mut Visitor) -> LessResult<Value> {
    if args.len() < 2 {
        return Ok(args.as_written());
    }

    let condition = args.positional[0].to_css_string();

    match compare(&condition, args.span)? {
        Some(true) => Ok(args.positional[1].clone()),
        Some(false) => Ok(args
            .get(2)
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()))),
        None => Ok(args.as_written()),
    }
}

#[cfg(test)]
mod test {
    use codemap::CodeMap;

    use super::compare;
    use crate::error::ErrorCategory;

    fn check(text: &str) -> Result<Option<bool>, ErrorCategory> {
        let mut map = CodeMap::new();
        let span = map.add_file("t".to_owned(), String::new()).span;
        compare(text, span).map_err(|e| e.category().unwrap())
    }

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(check("10 > 9"), Ok(Some(true)));
        assert_eq!(check("2px >= 2"), Ok(Some(true)));
        assert_eq!(check("1.5 != 1.5"), Ok(Some(false)));
        assert_eq!(check("3=3"), Ok(Some(true)));
    }

    #[test]
    fn colors_compare_by_channel() {
        assert_eq!(check("#fff == #ffffff"), Ok(Some(true)));
        assert_eq!(check("#000 < #001"), Ok(Some(true)));
    }

    #[test]
    fn malformed_conditions_are_undecided() {
        assert_eq!(check("1 2"), Ok(None));
        assert_eq!(check("> 2"), Ok(None));
        assert_eq!(check("a b > c"), Ok(None));
    }

    #[test]
    fn units_must_agree() {
        assert_eq!(check("1px < 2em"), Err(ErrorCategory::UnitMismatch));
        assert_eq!(check("#fff > 1"), Err(ErrorCategory::UnitMismatch));
    }
}
