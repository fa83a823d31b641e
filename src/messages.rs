//! User-facing message text.
//!
//! Messages that need a value spliced in are exposed as functions; the rest
//! are plain constants.

use std::path::Path;

pub const INVALID_CONTACT_DISPLAYED_INDEX: &str = "The contact index provided is invalid";
pub const INVALID_DELETE_INDEX: &str = "One or more contact indices provided are invalid";
pub const DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";
pub const COMMAND_UNKNOWN: &str = "Unknown command.";

pub const ADD_COMMAND_SUCCESS: &str = "New contact added: ";
pub const COMMAND_DUPLICATE_CONTACT: &str = "This contact is already in your contact list.";
pub const EDIT_COMMAND_SUCCESS: &str = "Edited contact: ";
pub const EDIT_COMMAND_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const EDIT_COMMAND_NOTHING_CHANGED: &str =
    "The provided values are identical to the contact's current details.";
pub const HELP_COMMAND_SHOW_HELP: &str = "Showing help.";
pub const LIST_COMMAND_SUCCESS: &str = "Listed all contacts";
pub const COMMAND_CLEAR_SUCCESS: &str = "All contacts have been removed!";
pub const COMMAND_EXIT_SUCCESS: &str = "Exiting app...";

pub const CONVERT_CONTACTS_DUPLICATE: &str = "Contacts list contains duplicate contact(s).";

/// Invalid command format, followed by the command's usage text.
pub fn command_invalid_format(usage: &str) -> String {
    format!("Invalid command format.\n{}", usage)
}

/// Number of contacts left visible after a find.
pub fn contacts_listed_overview(count: usize) -> String {
    format!("{} contacts listed!", count)
}

/// Deleted contacts, one per line.
pub fn delete_command_success(formatted_contacts: &str) -> String {
    format!("Deleted contact(s):\n{}", formatted_contacts)
}

/// Deleted contacts when the input repeated some indices.
pub fn delete_duplicate_command_success(formatted_contacts: &str) -> String {
    format!(
        "Deleted contact(s) (duplicate indices were ignored):\n{}",
        formatted_contacts
    )
}

/// A required field was absent from a stored contact.
pub fn field_missing(field: &str) -> String {
    format!("Contact's {} field is missing.", field)
}

pub fn file_ops_permission_error(path: &Path) -> String {
    format!(
        "Could not save data to file {} due to insufficient permissions to write to the file or the folder.",
        path.display()
    )
}
