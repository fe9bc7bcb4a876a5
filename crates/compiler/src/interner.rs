use lasso::{Rodeo, Spur};

use std::cell::RefCell;
use std::fmt::{self, Display};

thread_local!(static STRINGS: RefCell<Rodeo<Spur>> = RefCell::new(Rodeo::default()));

/// A string stored once per thread and compared by key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub(crate) struct InternedString(Spur);

impl InternedString {
    pub fn get_or_intern<T: AsRef<str>>(s: T) -> Self {
        Self(STRINGS.with(|interner| interner.borrow_mut().get_or_intern(s)))
    }

    pub fn resolve(self) -> String {
        self.with_str(str::to_owned)
    }

    /// Borrow the interned text for the duration of `f`
    pub fn with_str<R>(self, f: impl FnOnce(&str) -> R) -> R {
        STRINGS.with(|interner| f(interner.borrow().resolve(&self.0)))
    }
}

impl Display for InternedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|s| f.write_str(s))
    }
}
