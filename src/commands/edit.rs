//! Edit command.

use super::CommandResult;
use crate::domain::{AlternateContact, Email, Index, Name, Note, Phone, Tag};
use crate::error::CommandError;
use crate::messages;
use crate::models::{Contact, ContactFilter};
use crate::services::Model;
use std::collections::BTreeSet;

/// The fields to change on a contact. `None` leaves the field as it is;
/// set-valued fields replace the existing set wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditContactDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub note: Option<Note>,
    pub tags: Option<BTreeSet<Tag>>,
    pub alternates: Option<BTreeSet<AlternateContact>>,
}

impl EditContactDescriptor {
    /// Whether at least one field is set.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.note.is_some()
            || self.tags.is_some()
            || self.alternates.is_some()
    }

    /// Build the contact that results from applying this descriptor to
    /// `original`.
    pub fn apply_to(&self, original: &Contact) -> Contact {
        Contact::new(
            self.name.clone().unwrap_or_else(|| original.name().clone()),
            self.phone.clone().unwrap_or_else(|| original.phone().clone()),
            self.email.clone().unwrap_or_else(|| original.email().clone()),
            self.note.clone().unwrap_or_else(|| original.note().clone()),
            self.tags.clone().unwrap_or_else(|| original.tags().clone()),
            self.alternates
                .clone()
                .unwrap_or_else(|| original.alternates().clone()),
        )
    }
}

/// Edits the contact at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditContactDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditContactDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditContactDescriptor {
        &self.descriptor
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_contacts()
            .get(self.index.zero_based())
            .map(|c| (*c).clone())
            .ok_or(CommandError::InvalidIndex(
                messages::INVALID_CONTACT_DISPLAYED_INDEX,
            ))?;

        let edited = self.descriptor.apply_to(&target);

        if edited == target {
            return Err(CommandError::NothingEdited);
        }

        if !target.is_same_contact(&edited) && model.has_contact(&edited) {
            return Err(CommandError::DuplicateContact);
        }

        model.update_contact(&target, edited.clone())?;
        model.set_contacts_filter(ContactFilter::All);
        tracing::info!(index = self.index.one_based(), name = %edited.name(), "Contact edited");

        Ok(CommandResult::new(format!(
            "{}{}",
            messages::EDIT_COMMAND_SUCCESS,
            edited
        )))
    }
}
