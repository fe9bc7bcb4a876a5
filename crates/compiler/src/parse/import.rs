use std::path::{Path, PathBuf};

use codemap::Span;

use crate::{
    ast::{Block, Import, Rule, RuleKind},
    error::{ErrorCategory, LessError, LessResult},
    lexer::Lexer,
    utils::{collapse_whitespace, is_name_char},
    Token,
};

use super::{BaseParser, LessParser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImportKind {
    /// `@import "name";`, relative to the importing file
    Quoted,
    /// `@import <name>;`, relative to the base path
    Angle,
}

/// Read the target of an import we can load ourselves. Anything else, such
/// as `url(...)`, a remote file or an import with a media list, is left for
/// the browser.
fn import_target(target: &str) -> Option<(&str, ImportKind)> {
    let (name, rest, kind) = match target.chars().next()? {
        quote @ ('"' | '\'') => {
            let body = &target[1..];
            let close = body.find(quote)?;
            (&body[..close], &body[close + 1..], ImportKind::Quoted)
        }
        '<' => {
            let close = target.find('>')?;
            (&target[1..close], &target[close + 1..], ImportKind::Angle)
        }
        _ => return None,
    };

    if !rest.trim().is_empty() || name.is_empty() {
        return None;
    }

    if name.starts_with("http://") || name.starts_with("https://") || name.starts_with("//") {
        return None;
    }

    Some((name, kind))
}

impl<'a, 'b> LessParser<'a, 'b> {
    pub(super) fn looking_at_import(&self) -> bool {
        self.next_matches_ignore_case("@import")
            && !matches!(
                self.toks.peek_n("@import".len()),
                Some(Token { kind, .. }) if is_name_char(kind)
            )
    }

    pub(super) fn parse_import(&mut self, block: &mut Block, top_level: bool) -> LessResult<()> {
        let start = self.toks.cursor();
        let end = self.find_top_level(start, &[';', '}']);
        let span = self.toks.span_between(start, end);

        match self.toks.get(end) {
            Some(Token { kind: ';', .. }) => self.toks.set_cursor(end + 1),
            Some(Token { kind: '}', .. }) if !top_level => self.toks.set_cursor(end),
            Some(..) | None => return Err(("expected \";\".", span).into()),
        }

        let statement = collapse_whitespace(&self.toks.text_between(start, end));
        let target = statement["@import".len()..].trim();

        match import_target(target) {
            Some((name, kind)) => {
                let import = self.load_import(name, kind, span)?;
                block.imports.push(import);
            }
            None => {
                self.options
                    .diagnostics()
                    .trace(self.map, span, || format!("passing through {}", statement));
                block.children.push(Rule {
                    selectors: Vec::new(),
                    own_selectors: Vec::new(),
                    kind: RuleKind::Directive(statement),
                    condition: None,
                    block: Block::default(),
                    span,
                });
            }
        }

        Ok(())
    }

    /// Searches the directory the import is relative to, then each load path.
    /// A name without an extension also matches `name.less`.
    fn find_import(&self, name: &str, kind: ImportKind) -> Option<PathBuf> {
        let relative_to = match kind {
            ImportKind::Quoted => self
                .path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
            ImportKind::Angle => self.options.base_path.clone().unwrap_or_default(),
        };

        let fs = self.options.fs;

        std::iter::once(&relative_to)
            .chain(self.options.load_paths.iter())
            .find_map(|dir| {
                let candidate = dir.join(name);
                if fs.is_file(&candidate) {
                    return Some(candidate);
                }

                if candidate.extension().is_none() {
                    let with_extension = candidate.with_extension("less");
                    if fs.is_file(&with_extension) {
                        return Some(with_extension);
                    }
                }

                None
            })
    }

    fn load_import(&mut self, name: &str, kind: ImportKind, span: Span) -> LessResult<Import> {
        let path = match self.find_import(name, kind) {
            Some(path) => path,
            None => {
                return Err((
                    "Can't find stylesheet to import.",
                    span,
                    ErrorCategory::Import,
                )
                    .into())
            }
        };

        let key = self
            .options
            .fs
            .canonicalize(&path)
            .unwrap_or_else(|_| path.clone());

        if self.loading.contains(&key) {
            return Err((
                "This file is already being loaded.",
                span,
                ErrorCategory::Import,
            )
                .into());
        }

        let bytes = self.options.fs.read(&path).map_err(|err| -> Box<LessError> {
            (
                format!("Error reading {}: {}", path.display(), err),
                span,
                ErrorCategory::Import,
            )
                .into()
        })?;

        let text = String::from_utf8(bytes).map_err(|_| -> Box<LessError> {
            (
                format!("{} is not valid UTF-8.", path.display()),
                span,
                ErrorCategory::Import,
            )
                .into()
        })?;

        self.options
            .diagnostics()
            .trace(self.map, span, || format!("importing {}", path.display()));

        if path.extension().map_or(false, |ext| ext == "css") {
            return Ok(Import::Css(text));
        }

        let file = self.map.add_file(path.to_string_lossy().into_owned(), text);

        self.loading.push(key);
        let document = LessParser::new(
            Lexer::new_from_file(&file),
            self.map,
            self.options,
            path,
            self.loading,
        )
        .parse_document();
        self.loading.pop();

        Ok(Import::Stylesheet(Box::new(document?)))
    }
}
