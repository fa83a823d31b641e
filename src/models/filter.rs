//! Filters that decide which contacts are displayed.

use super::Contact;

/// Matches contacts whose name contains any of the keywords as a whole word,
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl NameContainsKeywordsPredicate {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn test(&self, contact: &Contact) -> bool {
        self.keywords.iter().any(|keyword| {
            contact
                .name()
                .words()
                .any(|word| word.to_lowercase() == keyword.to_lowercase())
        })
    }
}

/// The active display filter of the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactFilter {
    /// Show every contact.
    #[default]
    All,

    /// Show contacts matched by a name keyword search.
    NameKeywords(NameContainsKeywordsPredicate),
}

impl ContactFilter {
    pub fn matches(&self, contact: &Contact) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(predicate) => predicate.test(contact),
        }
    }
}
