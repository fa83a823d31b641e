//! Executable commands.
//!
//! Every command the user can type is one variant of [`Command`]. Variants
//! carry their validated payload and are executed against a [`Model`]
//! through [`Command::execute`].

mod add;
mod delete;
mod edit;
mod find;
pub mod usage;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditContactDescriptor};
pub use find::FindCommand;

use crate::error::CommandError;
use crate::messages;
use crate::models::ContactFilter;
use crate::services::Model;

/// Feedback from a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user
    pub feedback: String,

    /// Whether the help text should be displayed
    pub show_help: bool,

    /// Whether the application should shut down
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

/// A parsed command, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    List,
    Clear,
    Exit,
    Help,
}

impl Command {
    /// Run the command against `model`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` when the command cannot be applied, in which
    /// case the model is left unchanged.
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(add) => add.execute(model),
            Command::Edit(edit) => edit.execute(model),
            Command::Delete(delete) => delete.execute(model),
            Command::Find(find) => Ok(find.execute(model)),
            Command::List => {
                model.set_contacts_filter(ContactFilter::All);
                Ok(CommandResult::new(messages::LIST_COMMAND_SUCCESS))
            }
            Command::Clear => {
                model.clear_contacts();
                tracing::info!("All contacts cleared");
                Ok(CommandResult::new(messages::COMMAND_CLEAR_SUCCESS))
            }
            Command::Exit => Ok(CommandResult {
                exit: true,
                ..CommandResult::new(messages::COMMAND_EXIT_SUCCESS)
            }),
            Command::Help => Ok(CommandResult {
                show_help: true,
                ..CommandResult::new(messages::HELP_COMMAND_SHOW_HELP)
            }),
        }
    }

    /// Whether a successful run changes the stored contacts, and so should
    /// be followed by a save.
    pub fn mutates_contacts(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Edit(_) | Command::Delete(_) | Command::Clear
        )
    }

    /// The word that invokes this command.
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => usage::ADD_WORD,
            Command::Edit(_) => usage::EDIT_WORD,
            Command::Delete(_) => usage::DELETE_WORD,
            Command::Find(_) => usage::FIND_WORD,
            Command::List => usage::LIST_WORD,
            Command::Clear => usage::CLEAR_WORD,
            Command::Exit => usage::EXIT_WORD,
            Command::Help => usage::HELP_WORD,
        }
    }
}
