//! Find command.

use super::CommandResult;
use crate::messages;
use crate::models::{ContactFilter, NameContainsKeywordsPredicate};
use crate::services::Model;

/// Shows only the contacts whose names contain any of the keywords as whole
/// words, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: NameContainsKeywordsPredicate,
}

impl FindCommand {
    pub fn new(predicate: NameContainsKeywordsPredicate) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandResult {
        model.set_contacts_filter(ContactFilter::NameKeywords(self.predicate.clone()));
        let count = model.filtered_contacts().len();
        tracing::debug!(keywords = ?self.predicate.keywords(), count, "Contacts filtered by name");
        CommandResult::new(messages::contacts_listed_overview(count))
    }
}
