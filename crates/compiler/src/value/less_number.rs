use std::fmt::{self, Display};

use crate::{
    unit::Unit,
    utils::{format_float, fuzzy_equals},
};

#[derive(Debug, Clone)]
pub(crate) struct LessNumber {
    pub num: f64,
    pub unit: Unit,
    /// The source spelling of a number that has not been computed with
    pub as_written: Option<String>,
}

impl LessNumber {
    pub fn new(num: f64, unit: Unit) -> Self {
        Self {
            num,
            unit,
            as_written: None,
        }
    }

    /// Parse `-?(digits | digits? . digits)` followed by an optional unit
    pub fn parse(word: &str) -> Option<Self> {
        let bytes = word.as_bytes();
        let mut idx = usize::from(bytes.first() == Some(&b'-'));

        let int_start = idx;
        while bytes.get(idx).map_or(false, u8::is_ascii_digit) {
            idx += 1;
        }
        let has_int = idx > int_start;

        if bytes.get(idx) == Some(&b'.') {
            let fraction_start = idx + 1;
            let mut end = fraction_start;
            while bytes.get(end).map_or(false, u8::is_ascii_digit) {
                end += 1;
            }
            if end > fraction_start {
                idx = end;
            } else if !has_int {
                return None;
            }
        } else if !has_int {
            return None;
        }

        let num: f64 = word[..idx].parse().ok()?;
        let unit = Unit::parse(&word[idx..])?;

        Some(Self {
            num,
            unit,
            as_written: Some(word.to_owned()),
        })
    }
}

impl PartialEq for LessNumber {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && fuzzy_equals(self.num, other.num)
    }
}

impl Display for LessNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.as_written {
            Some(text) => f.write_str(text),
            None => write!(f, "{}{}", format_float(self.num), self.unit),
        }
    }
}
