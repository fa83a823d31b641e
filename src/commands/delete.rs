//! Delete command.

use super::CommandResult;
use crate::domain::Index;
use crate::error::CommandError;
use crate::messages;
use crate::models::Contact;
use crate::services::Model;

/// Deletes one or more contacts by their displayed indices.
///
/// Indices are distinct; the parser drops repeats and records that it did
/// through `had_duplicates`, which only changes the feedback text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    indices: Vec<Index>,
    had_duplicates: bool,
}

impl DeleteCommand {
    pub fn new(indices: Vec<Index>, had_duplicates: bool) -> Self {
        Self {
            indices,
            had_duplicates,
        }
    }

    pub fn indices(&self) -> &[Index] {
        &self.indices
    }

    pub fn had_duplicates(&self) -> bool {
        self.had_duplicates
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        // Resolve every index before removing anything.
        let targets: Vec<Contact> = {
            let shown = model.filtered_contacts();
            self.indices
                .iter()
                .map(|index| {
                    shown
                        .get(index.zero_based())
                        .map(|c| (*c).clone())
                        .ok_or(CommandError::InvalidIndex(messages::INVALID_DELETE_INDEX))
                })
                .collect::<Result<_, _>>()?
        };

        for contact in &targets {
            model.remove_contact(contact)?;
        }
        tracing::info!(count = targets.len(), "Contacts deleted");

        let formatted = targets
            .iter()
            .map(Contact::to_string)
            .collect::<Vec<_>>()
            .join(",\n");

        let feedback = if self.had_duplicates {
            messages::delete_duplicate_command_success(&formatted)
        } else {
            messages::delete_command_success(&formatted)
        };
        Ok(CommandResult::new(feedback))
    }
}
