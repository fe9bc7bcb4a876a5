use std::path::{Path, PathBuf};

use crate::{logger::Diagnostics, Fs, Logger, StdFs, StdLogger};

/// Configuration for compilation
///
/// The simplest usage is `lessen::Options::default()`; a builder pattern
/// is exposed for finer control.
#[derive(Debug)]
pub struct Options<'a> {
    pub(crate) fs: &'a dyn Fs,
    pub(crate) logger: &'a dyn Logger,
    pub(crate) load_paths: Vec<PathBuf>,
    pub(crate) base_path: Option<PathBuf>,
    pub(crate) unicode_error_messages: bool,
    pub(crate) quiet: bool,
    pub(crate) verbose: bool,
}

impl Default for Options<'_> {
    #[inline]
    fn default() -> Self {
        Self {
            fs: &StdFs,
            logger: &StdLogger,
            load_paths: Vec::new(),
            base_path: None,
            unicode_error_messages: true,
            quiet: false,
            verbose: false,
        }
    }
}

impl<'a> Options<'a> {
    /// Controls which file system `@import` reads from.
    ///
    /// Defaults to [`StdFs`], i.e. the real file system.
    #[must_use]
    #[inline]
    pub fn fs(mut self, fs: &'a dyn Fs) -> Self {
        self.fs = fs;
        self
    }

    /// Controls where warnings and trace output go.
    ///
    /// Defaults to [`StdLogger`], which writes to standard error.
    #[must_use]
    #[inline]
    pub fn logger(mut self, logger: &'a dyn Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Silence every warning and trace message.
    ///
    /// By default this is `false`.
    #[must_use]
    #[inline]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Report each variable, rule, mixin and import as the parser
    /// recognizes it, through [`Logger::debug`].
    ///
    /// By default this is `false`. `quiet` takes precedence.
    #[must_use]
    #[inline]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Add a directory to search when an import cannot be found next to the
    /// file that requested it (or, for `<...>` imports, under the base path).
    #[must_use]
    #[inline]
    pub fn load_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.load_paths.push(path.as_ref().to_owned());
        self
    }

    /// Append multiple load paths
    ///
    /// See [`Options::load_path`] for more information
    #[must_use]
    #[inline]
    pub fn load_paths<P: AsRef<Path>>(mut self, paths: &[P]) -> Self {
        for path in paths {
            self.load_paths.push(path.as_ref().to_owned());
        }

        self
    }

    /// The directory `@import <name>;` resolves against.
    ///
    /// Quoted imports (`@import "name";`) always resolve against the directory
    /// of the importing file instead. When unset, angle-bracket imports resolve
    /// against the current directory.
    #[must_use]
    #[inline]
    pub fn base_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.base_path = Some(path.as_ref().to_owned());
        self
    }

    /// Only emit ASCII characters in error messages.
    ///
    /// This does not affect the CSS output.
    #[must_use]
    #[inline]
    pub const fn unicode_error_messages(mut self, unicode_error_messages: bool) -> Self {
        self.unicode_error_messages = unicode_error_messages;
        self
    }

    pub(crate) fn diagnostics(&self) -> Diagnostics<'a> {
        Diagnostics::new(self.logger, self.quiet, self.verbose)
    }
}
