use codemap::{CodeMap, Span, SpanLoc};
use std::fmt::Debug;

/// Receives the diagnostics produced while compiling
pub trait Logger: Debug {
    /// Trace of what the parser recognized. Only produced when
    /// [`Options::verbose`](crate::Options::verbose) is set.
    fn debug(&self, location: SpanLoc, message: &str);

    /// Something was passed through unresolved or ignored
    fn warning(&self, location: SpanLoc, message: &str);
}

/// Writes diagnostics to standard error
#[derive(Debug)]
pub struct StdLogger;

impl Logger for StdLogger {
    #[inline]
    fn debug(&self, location: SpanLoc, message: &str) {
        eprintln!(
            "[debug] {}:{}: {}",
            location.file.name(),
            location.begin.line + 1,
            message
        );
    }

    #[inline]
    fn warning(&self, location: SpanLoc, message: &str) {
        eprintln!(
            "Warning: {}\n    ./{}:{}:{}",
            message,
            location.file.name(),
            location.begin.line + 1,
            location.begin.column + 1
        );
    }
}

/// Drops every diagnostic
#[derive(Debug)]
pub struct NullLogger;

impl Logger for NullLogger {
    #[inline]
    fn debug(&self, _location: SpanLoc, _message: &str) {}

    #[inline]
    fn warning(&self, _location: SpanLoc, _message: &str) {}
}

/// Applies `quiet`/`verbose` and resolves spans before handing a message to
/// the user's [`Logger`]
#[derive(Debug, Clone, Copy)]
pub(crate) struct Diagnostics<'a> {
    logger: &'a dyn Logger,
    quiet: bool,
    verbose: bool,
}

impl<'a> Diagnostics<'a> {
    pub fn new(logger: &'a dyn Logger, quiet: bool, verbose: bool) -> Self {
        Self {
            logger,
            quiet,
            verbose,
        }
    }

    /// `message` is only built when tracing is enabled
    pub fn trace(&self, map: &CodeMap, span: Span, message: impl FnOnce() -> String) {
        if self.verbose && !self.quiet {
            self.logger.debug(map.look_up_span(span), &message());
        }
    }

    pub fn warn(&self, map: &CodeMap, span: Span, message: &str) {
        if !self.quiet {
            self.logger.warning(map.look_up_span(span), message);
        }
    }
}
