//! Index value object.

use std::fmt;
use std::num::NonZeroUsize;

/// A position in the displayed contact list.
///
/// Users type 1-based indices; lookups into the list use
/// [`Index::zero_based`].
///
/// # Example
///
/// ```
/// use context_contacts::domain::Index;
///
/// let index = Index::from_one_based(3).unwrap();
/// assert_eq!(index.zero_based(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(NonZeroUsize);

impl Index {
    /// Returns `None` for zero.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        NonZeroUsize::new(one_based).map(Self)
    }

    /// Parse user text as a positive integer.
    ///
    /// Only plain ASCII digits are accepted; signs, zero and values that
    /// overflow `usize` yield `None`.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        text.parse::<usize>().ok().and_then(Self::from_one_based)
    }

    pub fn one_based(&self) -> usize {
        self.0.get()
    }

    pub fn zero_based(&self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
