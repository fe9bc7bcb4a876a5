mod functions;

pub(crate) use functions::{compare, ArgumentResult, GLOBAL_FUNCTIONS};

/// Imports common to all builtin functions
mod builtin_imports {
    pub(crate) use codemap::Span;

    pub(crate) use super::functions::{ArgumentResult, Normalized, SharedUnit};

    pub(crate) use crate::{
        color::Color,
        error::{ErrorCategory, LessResult},
        evaluate::Visitor,
        unit::Unit,
        utils::leading_float,
        value::Value,
    };
}
