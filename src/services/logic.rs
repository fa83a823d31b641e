//! Command execution service.
//!
//! Ties the parser, the model and storage together: one line of input is
//! parsed, executed against the model and, if it changed the contacts,
//! followed by a save.

use crate::commands::CommandResult;
use crate::error::LogicError;
use crate::models::Contact;
use crate::parser::parse_command;
use crate::services::model::{Model, ModelManager};
use crate::storage::ContactsStorage;

/// Outcome of one successfully executed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub result: CommandResult,

    /// Set when the command succeeded but saving afterwards failed. The
    /// in-memory change is kept.
    pub save_warning: Option<String>,
}

/// Logic service trait: the surface the user interface drives.
pub trait Logic {
    /// Parse and execute one line of user input.
    ///
    /// # Errors
    ///
    /// Returns `LogicError` if the line does not parse or the command fails.
    /// A failed save is not an error; see [`CommandOutcome::save_warning`].
    fn execute(&mut self, line: &str) -> Result<CommandOutcome, LogicError>;

    /// Contacts currently displayed.
    fn filtered_contacts(&self) -> Vec<&Contact>;
}

/// Default implementation of [`Logic`].
pub struct LogicManager {
    model: ModelManager,
    storage: Box<dyn ContactsStorage>,
}

impl LogicManager {
    pub fn new(model: ModelManager, storage: Box<dyn ContactsStorage>) -> Self {
        Self { model, storage }
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }
}

impl Logic for LogicManager {
    fn execute(&mut self, line: &str) -> Result<CommandOutcome, LogicError> {
        let command = parse_command(line)?;
        let result = command.execute(&mut self.model)?;
        tracing::debug!(command = command.word(), "Command executed");

        let save_warning = if command.mutates_contacts() {
            match self.storage.save(self.model.contacts()) {
                Ok(()) => None,
                Err(e) => {
                    tracing::warn!(
                        path = %self.storage.path().display(),
                        error = %e,
                        "Failed to save contacts"
                    );
                    Some(e.to_string())
                }
            }
        } else {
            None
        };

        Ok(CommandOutcome {
            result,
            save_warning,
        })
    }

    fn filtered_contacts(&self) -> Vec<&Contact> {
        self.model.filtered_contacts()
    }
}
