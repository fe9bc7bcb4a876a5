/*!
This crate provides functionality for compiling [Less](https://lesscss.org/) to CSS.

It covers the core of the language: variables, nested rules, mixins with
parameters, arithmetic on numbers, percentages and colors, a small set of
builtin functions, `@if`/`@elseif`/`@else` conditionals and `@import`.

## Use as library
```
# use lessen_compiler as lessen;
fn main() -> Result<(), Box<lessen::Error>> {
    let css = lessen::from_string(
        "@w: 10px; a { b { width: @w * 2; } }".to_owned(),
        &lessen::Options::default()
    )?;
    assert_eq!(css, "a b { width: 20px; }\n");
    Ok(())
}
```

## Use as binary
```bash
cargo install lessen
lessen input.less
```
*/

#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    // filter isn't fallible
    clippy::manual_filter_map,
    renamed_and_removed_lints,
    clippy::unknown_clippy_lints,
    clippy::single_match,
    clippy::new_without_default,
    clippy::single_match_else,
    clippy::multiple_crate_versions,
    clippy::wrong_self_convention,
    clippy::comparison_chain,
    clippy::unwrap_or_default,
    clippy::manual_unwrap_or_default,
    clippy::len_without_is_empty,
    unknown_lints,
)]

use std::{
    fmt,
    path::{Path, PathBuf},
};

#[cfg(feature = "wasm-exports")]
use wasm_bindgen::prelude::*;

use codemap::CodeMap;

pub use crate::error::{
    ErrorCategory, LessError as Error, LessResult as Result, PublicLessErrorKind as ErrorKind,
};
pub use crate::fs::{Fs, NullFs, StdFs};
pub use crate::logger::{Logger, NullLogger, StdLogger};
pub use crate::options::Options;
pub(crate) use crate::lexer::Token;
use crate::{ast::Document, evaluate::Visitor, lexer::Lexer, parse::LessParser};

/// The parsed syntax tree, for inspecting a stylesheet before it is compiled
pub mod less_ast {
    pub use crate::{
        ast::{
            Block, Conditional, Declaration, Document, Import, MixinCall, MixinParameters,
            Property, Rule, RuleKind,
        },
        common::Identifier,
    };
}

pub use codemap;

mod ast;
mod builtin;
mod color;
mod common;
mod error;
mod evaluate;
mod fs;
mod interner;
mod lexer;
mod logger;
mod options;
mod parse;
mod serializer;
mod unit;
mod utils;
mod value;

/// A stylesheet that has been parsed, along with everything it imports
pub struct StyleSheet {
    map: CodeMap,
    document: Document,
}

impl fmt::Debug for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSheet")
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}

impl StyleSheet {
    /// Parse `input`, loading its imports through [`Options::fs`].
    ///
    /// `file_name` is used in error messages, and quoted imports are resolved
    /// relative to its directory.
    pub fn parse<P: AsRef<Path>>(input: String, file_name: P, options: &Options) -> Result<Self> {
        let mut map = CodeMap::new();
        let path = file_name.as_ref().to_path_buf();
        let file = map.add_file(path.to_string_lossy().into_owned(), input);
        let lexer = Lexer::new_from_file(&file);

        let mut loading: Vec<PathBuf> = vec![options
            .fs
            .canonicalize(&path)
            .unwrap_or_else(|_| path.clone())];

        let document = LessParser::new(lexer, &mut map, options, path, &mut loading)
            .parse_document()
            .map_err(|e| e.locate(&map, options.unicode_error_messages))?;

        Ok(StyleSheet { map, document })
    }

    /// The parsed tree of the entry file
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Evaluate the stylesheet and write it out as CSS
    pub fn output(&self, options: &Options) -> Result<String> {
        let mut visitor = Visitor::new(options, &self.map);

        visitor
            .visit_document(&self.document)
            .and_then(|()| visitor.finish())
            .map_err(|e| e.locate(&self.map, options.unicode_error_messages))
    }
}

fn from_string_with_file_name<P: AsRef<Path>>(
    input: String,
    file_name: P,
    options: &Options,
) -> Result<String> {
    StyleSheet::parse(input, file_name, options)?.output(options)
}

/// Compile CSS from a path
///
/// n.b. `lessen` does not currently support files or paths that are not valid UTF-8
///
/// ```no_run
/// # use lessen_compiler as lessen;
/// fn main() -> Result<(), Box<lessen::Error>> {
///     let css = lessen::from_path("input.less", &lessen::Options::default())?;
///     Ok(())
/// }
/// ```
#[inline]
pub fn from_path<P: AsRef<Path>>(p: P, options: &Options) -> Result<String> {
    from_string_with_file_name(String::from_utf8(options.fs.read(p.as_ref())?)?, p, options)
}

/// Compile CSS from a string
///
/// ```
/// # use lessen_compiler as lessen;
/// fn main() -> Result<(), Box<lessen::Error>> {
///     let css = lessen::from_string(".a { .b { color: red; } }".to_owned(), &lessen::Options::default())?;
///     assert_eq!(css, ".a .b { color: red; }\n");
///     Ok(())
/// }
/// ```
#[inline]
pub fn from_string<S: Into<String>>(input: S, options: &Options) -> Result<String> {
    from_string_with_file_name(input.into(), "stdin", options)
}

#[cfg(feature = "wasm-exports")]
#[wasm_bindgen(js_name = from_string)]
pub fn from_string_js(input: String) -> std::result::Result<String, String> {
    from_string(input, &Options::default()).map_err(|e| e.to_string())
}
