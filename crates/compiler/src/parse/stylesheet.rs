use codemap::{Span, Spanned};

use crate::{
    ast::{Block, Declaration, Document, Property, Rule, RuleKind},
    common::Identifier,
    error::LessResult,
    utils::{collapse_whitespace, is_name_char},
    Token,
};

use super::{
    compose_selectors, mixin::parse_mixin_signature, split_condition, split_selector_list,
    BaseParser, LessParser,
};

impl<'a, 'b> LessParser<'a, 'b> {
    pub fn parse_document(mut self) -> LessResult<Document> {
        let mut block = Block::default();
        self.parse_block_contents(&mut block, &[], None)?;

        Ok(Document {
            path: self.path,
            block,
        })
    }

    /// Parse statements until the `}` closing the current block, or until the
    /// end of input at the top level. `opened_at` is the prelude of the block
    /// being parsed, and `None` at the top level.
    fn parse_block_contents(
        &mut self,
        block: &mut Block,
        parents: &[String],
        opened_at: Option<Span>,
    ) -> LessResult<()> {
        let top_level = opened_at.is_none();

        loop {
            self.whitespace();
            let start = self.toks.cursor();

            let first = match self.toks.peek() {
                Some(Token { kind, .. }) => kind,
                None => {
                    return match opened_at {
                        Some(span) => Err(("expected \"}\".", span).into()),
                        None => Ok(()),
                    }
                }
            };

            match first {
                '}' if top_level => {
                    return Err(("unmatched \"}\".", self.toks.current_span()).into());
                }
                '}' => {
                    self.toks.next();
                    return Ok(());
                }
                ';' => {
                    self.toks.next();
                    continue;
                }
                '@' if self.looking_at_import() => {
                    self.parse_import(block, top_level)?;
                    continue;
                }
                '@' if self.looking_at_variable() => {
                    self.parse_variable(block, top_level)?;
                    continue;
                }
                _ => {}
            }

            let end = self.find_top_level(start, &['{', ';', '}']);
            let terminator = self.toks.get(end).map(|tok| tok.kind);

            if terminator == Some('{') {
                self.toks.set_cursor(end + 1);
                let rule = self.parse_rule(start, end, parents)?;
                block.children.push(rule);
                continue;
            }

            if first == '@' {
                block.children.push(self.parse_directive(start, end));
            } else if top_level {
                return Err(("expected \"{\".", self.toks.span_between(start, end)).into());
            } else if first == '.' {
                let call = self.parse_mixin_call(end)?;
                block.declarations.push(Declaration::MixinCall(call));
            } else {
                let property = self.parse_property(start, end)?;
                block.declarations.push(Declaration::Property(property));
            }

            self.toks.set_cursor(if terminator == Some(';') {
                end + 1
            } else {
                end
            });
        }
    }

    /// `@name:` with optional whitespace before the colon
    fn looking_at_variable(&self) -> bool {
        let mut idx = self.toks.cursor() + 1;

        let name_start = idx;
        while matches!(self.toks.get(idx), Some(Token { kind, .. }) if is_name_char(kind)) {
            idx += 1;
        }
        if idx == name_start {
            return false;
        }

        while matches!(
            self.toks.get(idx),
            Some(Token {
                kind: ' ' | '\t' | '\n',
                ..
            })
        ) {
            idx += 1;
        }

        matches!(self.toks.get(idx), Some(Token { kind: ':', .. }))
    }

    fn parse_variable(&mut self, block: &mut Block, top_level: bool) -> LessResult<()> {
        let start = self.toks.cursor();
        self.expect_char('@')?;
        let name = self.parse_name();
        self.whitespace();
        self.expect_char(':')?;

        let value_start = self.toks.cursor();
        let end = self.find_top_level(value_start, &[';', '}']);

        match self.toks.get(end) {
            Some(Token { kind: ';', .. }) => {}
            Some(Token { kind: '}', .. }) if !top_level => {}
            Some(..) | None => {
                return Err(("expected \";\".", self.toks.span_between(start, end)).into())
            }
        }

        let value = Spanned {
            node: self.toks.text_between(value_start, end).trim().to_owned(),
            span: self.toks.span_between(value_start, end),
        };

        self.options
            .diagnostics()
            .trace(self.map, self.toks.span_between(start, end), || {
                format!("variable @{}: {}", name, value.node)
            });

        block.variables.insert(Identifier::from(name), value);

        self.toks.set_cursor(match self.toks.get(end) {
            Some(Token { kind: ';', .. }) => end + 1,
            _ => end,
        });

        Ok(())
    }

    fn parse_property(&mut self, start: usize, end: usize) -> LessResult<Property> {
        let span = self.toks.span_between(start, end);

        let colon = match (start..end).find(|&idx| self.toks.get(idx).map(|t| t.kind) == Some(':')) {
            Some(colon) => colon,
            None => {
                return Err((
                    format!(
                        "expected \":\" in declaration \"{}\".",
                        collapse_whitespace(&self.toks.text_between(start, end))
                    ),
                    span,
                )
                    .into())
            }
        };

        let name = collapse_whitespace(&self.toks.text_between(start, colon));
        if name.is_empty() {
            return Err(("expected a property name.", span).into());
        }

        let value = Spanned {
            node: self.toks.text_between(colon + 1, end).trim().to_owned(),
            span: self.toks.span_between(colon + 1, end),
        };

        Ok(Property { name, value })
    }

    /// A bodiless at-rule, kept verbatim
    fn parse_directive(&mut self, start: usize, end: usize) -> Rule {
        let text = collapse_whitespace(&self.toks.text_between(start, end));
        let span = self.toks.span_between(start, end);

        self.options
            .diagnostics()
            .trace(self.map, span, || format!("directive {}", text));

        Rule {
            selectors: Vec::new(),
            own_selectors: Vec::new(),
            kind: RuleKind::Directive(text),
            condition: None,
            block: Block::default(),
            span,
        }
    }

    /// Parse a rule whose prelude spans `start..end`. The cursor is just past
    /// the opening `{`.
    fn parse_rule(&mut self, start: usize, end: usize, parents: &[String]) -> LessResult<Rule> {
        let span = self.toks.span_between(start, end);
        let prelude = collapse_whitespace(&self.toks.text_between(start, end));
        let (selector, condition) = split_condition(&prelude, span);

        let (kind, own_selectors, selectors) = match parse_mixin_signature(&selector, span)? {
            Some((name, params)) => {
                self.options.diagnostics().trace(self.map, span, || {
                    format!("mixin {} with {} parameter(s)", name, params.len())
                });
                (RuleKind::Mixin(params), vec![name.clone()], vec![name])
            }
            None if selector.starts_with('@') => {
                self.options
                    .diagnostics()
                    .trace(self.map, span, || format!("at-rule {}", selector));
                (RuleKind::AtRule(selector), Vec::new(), parents.to_vec())
            }
            None => {
                let own = split_selector_list(&selector);
                let composed = compose_selectors(parents, &own);
                self.options
                    .diagnostics()
                    .trace(self.map, span, || format!("rule {}", composed.join(", ")));
                (RuleKind::Style, own, composed)
            }
        };

        let mut block = Block::default();
        let child_parents = match kind {
            RuleKind::Mixin(..) => &own_selectors,
            RuleKind::Style | RuleKind::AtRule(..) | RuleKind::Directive(..) => &selectors,
        };
        self.parse_block_contents(&mut block, child_parents, Some(span))?;

        Ok(Rule {
            selectors,
            own_selectors,
            kind,
            condition,
            block,
            span,
        })
    }
}

#[cfg(test)]
mod test {
    use codemap::CodeMap;

    use crate::{
        ast::{Declaration, Document, RuleKind},
        lexer::Lexer,
        Options,
    };

    use super::LessParser;

    fn parse(input: &str) -> Document {
        try_parse(input).unwrap()
    }

    fn try_parse(input: &str) -> Result<Document, String> {
        let mut map = CodeMap::new();
        let file = map.add_file("input.less".to_owned(), input.to_owned());
        let options = Options::default().fs(&crate::NullFs);
        let mut loading = Vec::new();
        LessParser::new(
            Lexer::new_from_file(&file),
            &mut map,
            &options,
            "input.less".into(),
            &mut loading,
        )
        .parse_document()
        .map_err(|e| e.to_string())
    }

    #[test]
    fn media_query_is_not_a_variable() {
        let doc = parse("@media print { a { b: c; } }");
        assert!(doc.block.variables.is_empty());
        assert!(matches!(&doc.rules()[0].kind, RuleKind::AtRule(name) if name == "@media print"));
    }

    #[test]
    fn last_property_needs_no_semicolon() {
        let doc = parse("a { color: red; width: 1px }");
        assert_eq!(doc.rules()[0].block.properties().count(), 2);
    }

    #[test]
    fn redefined_variable_keeps_its_position() {
        let doc = parse("@a: 1; @b: 2; @a: 3;");
        let names: Vec<String> = doc
            .block
            .variables
            .keys()
            .map(|k| k.as_string())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(doc.variable("a"), Some("3"));
    }

    #[test]
    fn nested_rules_compose_selectors() {
        let doc = parse(".a { .b { c: d; } }");
        assert_eq!(doc.rules()[0].block.children[0].selectors, vec![".a .b"]);
    }

    #[test]
    fn mixin_calls_and_properties_keep_source_order() {
        let doc = parse(".m { x: y; } a { b: c; .m; d: e; }");
        let decls = &doc.rules()[1].block.declarations;
        assert!(matches!(decls[0], Declaration::Property(..)));
        assert!(matches!(&decls[1], Declaration::MixinCall(call) if call.name == ".m"));
        assert!(matches!(decls[2], Declaration::Property(..)));
    }

    #[test]
    fn unbalanced_braces_are_errors() {
        assert!(try_parse("a { b: c;").is_err());
        assert!(try_parse("a { b: c; } }").is_err());
    }

    #[test]
    fn properties_need_a_colon() {
        assert!(try_parse("a { color red; }").is_err());
    }
}
