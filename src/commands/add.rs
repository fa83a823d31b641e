//! Add command.

use super::CommandResult;
use crate::error::CommandError;
use crate::messages;
use crate::models::{Contact, ContactFilter};
use crate::services::Model;

/// Adds a contact to the contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    contact: Contact,
}

impl AddCommand {
    pub fn new(contact: Contact) -> Self {
        Self { contact }
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.has_contact(&self.contact) {
            return Err(CommandError::DuplicateContact);
        }

        model.add_contact(self.contact.clone())?;
        model.set_contacts_filter(ContactFilter::All);
        tracing::info!(name = %self.contact.name(), "Contact added");

        Ok(CommandResult::new(format!(
            "{}{}",
            messages::ADD_COMMAND_SUCCESS,
            self.contact
        )))
    }
}
