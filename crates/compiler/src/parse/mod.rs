use std::path::PathBuf;

use codemap::CodeMap;

use crate::{lexer::Lexer, Options};

pub(crate) use base::BaseParser;
pub(crate) use selector::{compose_selectors, split_condition, split_selector_list};
pub(crate) use value::{parse_expression, split_arguments, tokenize};

mod base;
mod import;
mod mixin;
mod selector;
mod stylesheet;
mod value;

/// Turns one file into a [`Document`](crate::ast::Document). Imports are
/// parsed eagerly by nested parsers sharing the same code map.
pub(crate) struct LessParser<'a, 'b> {
    pub toks: Lexer,
    pub map: &'b mut CodeMap,
    pub path: PathBuf,
    pub options: &'a Options<'a>,
    /// Files currently being parsed, outermost first
    pub loading: &'b mut Vec<PathBuf>,
}

impl<'a, 'b> LessParser<'a, 'b> {
    pub fn new(
        toks: Lexer,
        map: &'b mut CodeMap,
        options: &'a Options<'a>,
        path: PathBuf,
        loading: &'b mut Vec<PathBuf>,
    ) -> Self {
        LessParser {
            toks,
            map,
            path,
            options,
            loading,
        }
    }
}

impl<'a, 'b> BaseParser for LessParser<'a, 'b> {
    fn toks(&self) -> &Lexer {
        &self.toks
    }

    fn toks_mut(&mut self) -> &mut Lexer {
        &mut self.toks
    }
}
