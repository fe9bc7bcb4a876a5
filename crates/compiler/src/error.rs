use std::{
    error::Error,
    fmt::{self, Display},
    io,
    string::FromUtf8Error,
    sync::Arc,
};

use codemap::{CodeMap, Span, SpanLoc};

pub type LessResult<T> = Result<T, Box<LessError>>;

/// The broad class of a fatal compilation error
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Unbalanced braces, missing `:` or `;`, malformed mixin signatures and
    /// other structural problems in the source text
    Syntax,

    /// A mixin was invoked without a value for a parameter that has no default
    MissingParameter,

    /// Two operands (or function arguments) carry incompatible units
    UnitMismatch,

    /// A hex color literal inside an expression is not 3 or 6 digits long
    InvalidColor,

    /// A builtin function received an argument of the wrong kind
    InvalidArgument,

    /// A variable refers to itself, or mixins expand into each other without end
    Recursion,

    /// An `@import` could not be resolved or forms a cycle
    Import,
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Syntax => "syntax error",
            Self::MissingParameter => "missing parameter",
            Self::UnitMismatch => "unit mismatch",
            Self::InvalidColor => "invalid color",
            Self::InvalidArgument => "invalid argument",
            Self::Recursion => "recursion",
            Self::Import => "import error",
        })
    }
}

#[derive(Debug, Clone)]
pub struct LessError {
    kind: LessErrorKind,
}

impl LessError {
    pub(crate) fn new(message: String, span: Span, category: ErrorCategory) -> Box<Self> {
        Box::new(LessError {
            kind: LessErrorKind::Raw(message, span, category),
        })
    }

    /// The detailed kind of this error
    pub fn kind(self) -> PublicLessErrorKind {
        match self.kind {
            LessErrorKind::ParseError {
                message,
                loc,
                unicode,
                category,
            } => PublicLessErrorKind::ParseError {
                message,
                loc,
                unicode,
                category,
            },
            LessErrorKind::FromUtf8Error(s) => PublicLessErrorKind::FromUtf8Error(s),
            LessErrorKind::IoError(io) => PublicLessErrorKind::IoError(io),
            LessErrorKind::Raw(..) => unreachable!("raw errors should not be accessible by users"),
        }
    }

    /// Which class of fatal error this is, if it originated from the stylesheet
    /// itself rather than from the environment
    pub fn category(&self) -> Option<ErrorCategory> {
        match &self.kind {
            LessErrorKind::Raw(_, _, category) | LessErrorKind::ParseError { category, .. } => {
                Some(*category)
            }
            LessErrorKind::IoError(..) | LessErrorKind::FromUtf8Error(..) => None,
        }
    }

    /// Attach a source location to an error raised against a span. Errors that
    /// already carry a location are returned unchanged.
    pub(crate) fn locate(self: Box<Self>, map: &CodeMap, unicode: bool) -> Box<Self> {
        match self.kind {
            LessErrorKind::Raw(message, span, category) => Box::new(LessError {
                kind: LessErrorKind::ParseError {
                    message,
                    loc: map.look_up_span(span),
                    unicode,
                    category,
                },
            }),
            _ => self,
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum PublicLessErrorKind {
    ParseError {
        /// The message attached to this error
        message: String,

        /// The location in the source file where the error occurred
        loc: SpanLoc,

        /// Whether or not the error message should render using unicode characters
        unicode: bool,

        category: ErrorCategory,
    },

    /// This error likely occurred when reading the input file
    IoError(Arc<io::Error>),

    /// The input file was not valid UTF-8
    FromUtf8Error(String),
}

#[derive(Debug, Clone)]
enum LessErrorKind {
    /// A raw error with no location metadata beyond its span
    Raw(String, Span, ErrorCategory),
    ParseError {
        message: String,
        loc: SpanLoc,
        unicode: bool,
        category: ErrorCategory,
    },
    IoError(Arc<io::Error>),
    FromUtf8Error(String),
}

impl Display for LessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (message, loc, unicode) = match &self.kind {
            LessErrorKind::ParseError {
                message,
                loc,
                unicode,
                ..
            } => (message, loc, *unicode),
            LessErrorKind::FromUtf8Error(msg) => return writeln!(f, "Error: {}", msg),
            LessErrorKind::IoError(err) => return writeln!(f, "Error: {}", err),
            LessErrorKind::Raw(message, ..) => return writeln!(f, "Error: {}", message),
        };

        let (top, side, bottom) = if unicode {
            ('╷', '│', '╵')
        } else {
            (',', '|', '\'')
        };

        let first_line = loc.begin.line + 1;
        let line_width = first_line.to_string().len();
        let padding = " ".repeat(line_width + 1);
        let source_line = loc.file.source_line(loc.begin.line);

        let underline_len = if loc.end.line == loc.begin.line {
            loc.end.column.saturating_sub(loc.begin.column)
        } else {
            source_line.chars().count().saturating_sub(loc.begin.column)
        }
        .max(1);

        writeln!(f, "Error: {}", message)?;
        writeln!(f, "{}{}", padding, top)?;
        writeln!(f, "{} {} {}", first_line, side, source_line)?;
        writeln!(
            f,
            "{}{} {}{}",
            padding,
            side,
            " ".repeat(loc.begin.column),
            "^".repeat(underline_len)
        )?;
        writeln!(f, "{}{}", padding, bottom)?;
        writeln!(
            f,
            "  ./{}:{}:{}",
            loc.file.name(),
            first_line,
            loc.begin.column + 1
        )?;
        Ok(())
    }
}

impl From<io::Error> for Box<LessError> {
    #[inline]
    fn from(error: io::Error) -> Box<LessError> {
        Box::new(LessError {
            kind: LessErrorKind::IoError(Arc::new(error)),
        })
    }
}

impl From<FromUtf8Error> for Box<LessError> {
    #[inline]
    fn from(error: FromUtf8Error) -> Box<LessError> {
        Box::new(LessError {
            kind: LessErrorKind::FromUtf8Error(format!(
                "Invalid UTF-8 character \"\\x{:X?}\"",
                error.as_bytes()[error.utf8_error().valid_up_to()]
            )),
        })
    }
}

impl From<(&str, Span)> for Box<LessError> {
    #[inline]
    fn from(error: (&str, Span)) -> Box<LessError> {
        LessError::new(error.0.to_owned(), error.1, ErrorCategory::Syntax)
    }
}

impl From<(String, Span)> for Box<LessError> {
    #[inline]
    fn from(error: (String, Span)) -> Box<LessError> {
        LessError::new(error.0, error.1, ErrorCategory::Syntax)
    }
}

impl From<(&str, Span, ErrorCategory)> for Box<LessError> {
    #[inline]
    fn from(error: (&str, Span, ErrorCategory)) -> Box<LessError> {
        LessError::new(error.0.to_owned(), error.1, error.2)
    }
}

impl From<(String, Span, ErrorCategory)> for Box<LessError> {
    #[inline]
    fn from(error: (String, Span, ErrorCategory)) -> Box<LessError> {
        LessError::new(error.0, error.1, error.2)
    }
}

impl Error for LessError {}
