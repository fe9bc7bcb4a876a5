use codemap::{Span, Spanned};

use crate::{
    ast::{tokens_to_string, Expr, ListItem, ValueToken},
    builtin::{ArgumentResult, GLOBAL_FUNCTIONS},
    color::Color,
    common::Identifier,
    error::{ErrorCategory, LessResult},
    parse::{parse_expression, split_arguments, tokenize},
    value::Value,
};

use super::{operate, Scope, Variable, Visitor};

impl<'a> Visitor<'a> {
    /// Evaluate a raw property or variable value in `scope`, producing the
    /// text to write out. Whatever cannot be resolved is written as it was.
    pub(crate) fn evaluate(&mut self, raw: &Spanned<String>, scope: &Scope) -> LessResult<String> {
        let tokens = self.substitute_variables(tokenize(&raw.node), scope, raw.span)?;
        let value = self.eval_expr(&parse_expression(&tokens), raw.span)?;

        Ok(value.to_css_string())
    }

    /// Replace each `@name` with its evaluated value, which is evaluated in
    /// the scope that defines it. Unknown variables stay as they are.
    fn substitute_variables(
        &mut self,
        tokens: Vec<ValueToken>,
        scope: &Scope,
        span: Span,
    ) -> LessResult<Vec<ValueToken>> {
        let mut substituted = Vec::with_capacity(tokens.len());

        for token in tokens {
            match token {
                ValueToken::Variable(name) => {
                    let ident = Identifier::from(name.as_str());
                    match scope.resolve_variable(ident) {
                        Some(Variable::Evaluated(text)) => substituted.extend(tokenize(text)),
                        Some(Variable::Raw(value, home)) => {
                            let text = self.evaluate_variable(ident, value, &home, span)?;
                            substituted.extend(tokenize(&text));
                        }
                        None => substituted.push(ValueToken::Word(format!("@{}", name))),
                    }
                }
                ValueToken::Call { name, args } => substituted.push(ValueToken::Call {
                    name,
                    args: self.substitute_variables(args, scope, span)?,
                }),
                ValueToken::Group(inner) => substituted.push(ValueToken::Group(
                    self.substitute_variables(inner, scope, span)?,
                )),
                token => substituted.push(token),
            }
        }

        Ok(substituted)
    }

    fn evaluate_variable(
        &mut self,
        name: Identifier,
        value: &Spanned<String>,
        home: &Scope,
        used_at: Span,
    ) -> LessResult<String> {
        let key = (name, value.span);

        if self.resolving.contains(&key) {
            return Err((
                format!("Variable @{} is defined in terms of itself.", name),
                used_at,
                ErrorCategory::Recursion,
            )
                .into());
        }

        self.resolving.push(key);
        let text = self.evaluate(value, home);
        self.resolving.pop();

        text
    }

    pub(super) fn eval_expr(&mut self, expr: &Expr, span: Span) -> LessResult<Value> {
        Ok(match expr {
            Expr::Empty => Value::String(String::new()),
            Expr::Word(word) => Value::from_word(word),
            Expr::List(items) => {
                let mut text = String::new();
                for item in items {
                    match item {
                        ListItem::Expr(expr) => {
                            text.push_str(&self.eval_expr(expr, span)?.to_css_string());
                        }
                        ListItem::Separator(separator) => text.push_str(&separator.to_string()),
                    }
                }
                Value::String(text)
            }
            Expr::BinaryOp(lhs, op, rhs) => {
                let lhs = self.eval_operand(lhs, span)?;
                let rhs = self.eval_operand(rhs, span)?;

                match operate(*op, &lhs, &rhs, span)? {
                    Some(value) => value,
                    None => {
                        let op = op.to_string();
                        let parts = [lhs.to_css_string(), op, rhs.to_css_string()];
                        let parts: Vec<&str> = parts
                            .iter()
                            .map(String::as_str)
                            .filter(|part| !part.is_empty())
                            .collect();
                        Value::String(parts.join(" "))
                    }
                }
            }
            Expr::Call { name, args } => self.eval_call(name, args, span)?,
            Expr::Group(inner) => self.eval_group(inner, span)?,
        })
    }

    /// Parentheses around an operand only group; they are not written out
    fn eval_operand(&mut self, expr: &Expr, span: Span) -> LessResult<Value> {
        match expr {
            Expr::Group(inner) => self.eval_expr(&parse_expression(inner), span),
            expr => self.eval_expr(expr, span),
        }
    }

    /// A group whose contents evaluate to themselves, such as
    /// `(max-width: 10px)`, keeps its parentheses
    fn eval_group(&mut self, inner: &[ValueToken], span: Span) -> LessResult<Value> {
        let value = self.eval_expr(&parse_expression(inner), span)?;
        let verbatim = self.render_verbatim(inner, span)?;

        if value.to_css_string() == verbatim.trim() {
            Ok(Value::String(format!("({})", verbatim)))
        } else {
            Ok(value)
        }
    }

    fn eval_call(&mut self, name: &str, args: &[ValueToken], span: Span) -> LessResult<Value> {
        if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") {
            let text = format!("{}({})", name, self.render_verbatim(args, span)?);
            return Ok(Color::from_function(&text).map_or(Value::String(text), Value::Color));
        }

        let (name, builtin) = match GLOBAL_FUNCTIONS.get_entry(name) {
            Some((name, builtin)) => (*name, *builtin),
            None => {
                return Ok(Value::String(format!(
                    "{}({})",
                    name,
                    self.render_verbatim(args, span)?
                )))
            }
        };

        let mut positional = Vec::new();
        for arg in split_arguments(args) {
            positional.push(self.eval_expr(&parse_expression(arg), span)?);
        }

        builtin.call(ArgumentResult::new(name, positional, span), self)
    }

    /// Write tokens back out as text, evaluating only the builtin function
    /// calls among them
    fn render_verbatim(&mut self, tokens: &[ValueToken], span: Span) -> LessResult<String> {
        let mut text = String::new();

        for token in tokens {
            match token {
                ValueToken::Call { name, args } if GLOBAL_FUNCTIONS.contains_key(name.as_str()) => {
                    text.push_str(&self.eval_call(name, args, span)?.to_css_string());
                }
                ValueToken::Call { name, args } => {
                    text.push_str(name);
                    text.push('(');
                    text.push_str(&self.render_verbatim(args, span)?);
                    text.push(')');
                }
                ValueToken::Group(inner) => {
                    text.push('(');
                    text.push_str(&self.render_verbatim(inner, span)?);
                    text.push(')');
                }
                token => text.push_str(&tokens_to_string(std::slice::from_ref(token))),
            }
        }

        Ok(text)
    }
}

#[cfg(test)]
mod test {
    use codemap::{CodeMap, Spanned};

    use crate::{
        ast::Block,
        common::Identifier,
        evaluate::{Scope, Visitor},
        NullLogger, Options,
    };

    fn eval_with(variables: &[(&str, &str)], input: &str) -> Result<String, String> {
        let mut map = CodeMap::new();
        let span = map.add_file("t".to_owned(), input.to_owned()).span;

        let mut block = Block::default();
        for (name, value) in variables {
            block.variables.insert(
                Identifier::from(*name),
                Spanned {
                    node: (*value).to_owned(),
                    span: map.add_file((*name).to_owned(), (*value).to_owned()).span,
                },
            );
        }

        let options = Options::default().logger(&NullLogger);
        let mut visitor = Visitor::new(&options, &map);
        let raw = Spanned {
            node: input.to_owned(),
            span,
        };

        visitor
            .evaluate(&raw, &Scope::root(&block))
            .map_err(|e| e.to_string())
    }

    fn eval(input: &str) -> String {
        eval_with(&[], input).unwrap()
    }

    #[test]
    fn precedence() {
        assert_eq!(eval("1px + 2px * 3"), "7px");
        assert_eq!(eval("(1px + 2px) * 3"), "9px");
    }

    #[test]
    fn plain_values_are_unchanged() {
        assert_eq!(eval("1px solid #FFF"), "1px solid #FFF");
        assert_eq!(eval("\"Helvetica Neue\", sans-serif"), "\"Helvetica Neue\", sans-serif");
        assert_eq!(eval("url(a/b.png) no-repeat"), "url(a/b.png) no-repeat");
    }

    #[test]
    fn unchanged_groups_keep_their_parentheses() {
        assert_eq!(eval("(max-width: 10px)"), "(max-width: 10px)");
    }

    #[test]
    fn builtins_inside_unknown_functions_are_evaluated() {
        assert_eq!(eval("translate(max(1px, 3px), 0)"), "translate(3px, 0)");
    }

    #[test]
    fn rgb_literals_take_part_in_arithmetic() {
        assert_eq!(eval("rgb(0, 0, 0) + #010203"), "#010203");
        assert_eq!(eval("rgb(0, 0, 0)"), "rgb(0, 0, 0)");
    }

    #[test]
    fn variables_are_substituted() {
        assert_eq!(eval_with(&[("w", "10px")], "@w * 2").unwrap(), "20px");
        assert_eq!(
            eval_with(&[("a", "@b + 1"), ("b", "2")], "@a").unwrap(),
            "3"
        );
        assert_eq!(eval_with(&[], "@missing").unwrap(), "@missing");
    }

    #[test]
    fn variable_cycles_are_errors() {
        assert!(eval_with(&[("a", "@b"), ("b", "@a")], "@a").is_err());
    }

    #[test]
    fn text_operands_are_left_alone() {
        assert_eq!(eval("auto + 1px"), "auto + 1px");
    }
}
