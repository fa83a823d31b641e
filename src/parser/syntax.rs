//! Command syntax: argument prefixes.

use std::fmt;

/// A marker that introduces a field value in command text, such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_NOTE: Prefix = Prefix::new("o/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_ALTERNATE: Prefix = Prefix::new("a/");

/// Every contact field prefix, in the order values are validated.
pub const FIELD_PREFIXES: [Prefix; 6] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_NOTE,
    PREFIX_TAG,
    PREFIX_ALTERNATE,
];

/// Prefixes that may appear at most once.
pub const SINGLE_VALUED_PREFIXES: [Prefix; 4] =
    [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_NOTE];
