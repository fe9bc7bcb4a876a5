use codemap::{Span, Spanned};

use crate::{
    ast::{MixinCall, MixinParameters},
    common::Identifier,
    error::LessResult,
    utils::{contains_top_level, is_name_char, matching_open_paren, split_top_level},
};

use super::{BaseParser, LessParser};

/// Recognize `.name(...)` as a mixin definition and read its parameters.
///
/// Parameters are separated by `;` when the list contains one, otherwise by
/// `,`. Each is `@name` or `@name: default`.
pub(super) fn parse_mixin_signature(
    selector: &str,
    span: Span,
) -> LessResult<Option<(String, MixinParameters)>> {
    let rest = match selector.strip_prefix('.') {
        Some(rest) => rest,
        None => return Ok(None),
    };

    let name_len = rest.find(|c| !is_name_char(c)).unwrap_or(rest.len());
    if name_len == 0 {
        return Ok(None);
    }

    let list = rest[name_len..].trim_start();
    if !list.starts_with('(') || matching_open_paren(list) != Some(0) {
        return Ok(None);
    }

    let name = format!(".{}", &rest[..name_len]);
    let inner = &list[1..list.len() - 1];
    let separator = if contains_top_level(inner, ';') { ';' } else { ',' };

    let mut params = MixinParameters::new();

    for piece in split_top_level(inner, separator) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }

        let declaration = match piece.strip_prefix('@') {
            Some(declaration) => declaration,
            None => {
                return Err((
                    format!(
                        "Invalid mixin declaration: expected \"@\" before \"{}\".",
                        piece
                    ),
                    span,
                )
                    .into())
            }
        };

        let (param, default) = match declaration.split_once(':') {
            Some((param, default)) => (param.trim(), Some(default.trim())),
            None => (declaration.trim(), None),
        };

        if param.is_empty() || !param.chars().all(is_name_char) {
            return Err((format!("Invalid mixin parameter \"@{}\".", param), span).into());
        }

        let ident = Identifier::from(param);
        if params.contains_key(&ident) {
            return Err((
                format!("Duplicate parameter \"@{}\" in mixin {}.", param, name),
                span,
            )
                .into());
        }

        params.insert(
            ident,
            default.map(|default| Spanned {
                node: default.to_owned(),
                span,
            }),
        );
    }

    Ok(Some((name, params)))
}

impl<'a, 'b> LessParser<'a, 'b> {
    /// Parse `.name;` or `.name(args);`. `end` is the index of the statement's
    /// terminator. The cursor is left on it.
    pub(super) fn parse_mixin_call(&mut self, end: usize) -> LessResult<MixinCall> {
        let start = self.toks.cursor();
        let span = self.toks.span_between(start, end);

        self.expect_char('.')?;
        let name = self.parse_name();
        if name.is_empty() {
            return Err(("expected a mixin name.", span).into());
        }
        self.whitespace();

        let mut args = Vec::new();

        if self.toks.next_char_is('(') {
            let open = self.toks.cursor();
            let close = self.find_top_level(open + 1, &[')']);
            if close >= end {
                return Err(("expected \")\".", span).into());
            }

            let separator = if self.split_range(open + 1, close, ';').len() > 1 {
                ';'
            } else {
                ','
            };

            for (arg_start, arg_end) in self.split_range(open + 1, close, separator) {
                args.push(Spanned {
                    node: self
                        .toks
                        .text_between(arg_start, arg_end)
                        .trim()
                        .to_owned(),
                    span: self.toks.span_between(arg_start, arg_end),
                });
            }

            if args.len() == 1 && args[0].node.is_empty() {
                args.clear();
            }

            self.toks.set_cursor(close + 1);
            self.whitespace();
        }

        if self.scan("!important") {
            self.whitespace();
        }

        if self.toks.cursor() != end {
            return Err(("expected \";\" after mixin call.", span).into());
        }

        self.options.diagnostics().trace(self.map, span, || {
            format!("mixin call .{} with {} argument(s)", name, args.len())
        });

        Ok(MixinCall {
            name: format!(".{}", name),
            args,
            span,
        })
    }
}
