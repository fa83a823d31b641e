//! Error types for the contact manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use crate::messages;
use crate::parser::Prefix;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the unique contact collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactsError {
    /// The operation would leave two contacts with the same identity
    #[error("Operation would result in duplicate contacts")]
    Duplicate,

    /// The target contact is not in the collection
    #[error("Contact not found: {0}")]
    NotFound(String),
}

/// Errors that can occur while turning command text into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Command text does not follow the command's grammar
    #[error("{}", messages::command_invalid_format(.0))]
    InvalidFormat(String),

    /// A single-valued prefix was supplied more than once
    #[error("{}{}", messages::DUPLICATE_FIELDS, format_prefixes(.0))]
    DuplicatePrefixes(Vec<Prefix>),

    /// A supplied value failed its field constraint
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An edit named no field to change
    #[error("{}", messages::EDIT_COMMAND_NOT_EDITED)]
    NotEdited,

    /// The command word is not recognised
    #[error("{}", messages::COMMAND_UNKNOWN)]
    UnknownCommand,
}

fn format_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Errors that can occur while executing a parsed command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// An index does not point into the displayed list
    #[error("{0}")]
    InvalidIndex(&'static str),

    /// The command would create a second contact with the same name
    #[error("{}", messages::COMMAND_DUPLICATE_CONTACT)]
    DuplicateContact,

    /// The edit would leave the contact unchanged
    #[error("{}", messages::EDIT_COMMAND_NOTHING_CHANGED)]
    NothingEdited,

    /// The contact collection rejected the change
    #[error(transparent)]
    Contacts(#[from] ContactsError),
}

/// Errors surfaced to the user for a single line of input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Errors that can occur when reading or writing the data file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Stored data is malformed or contains duplicates
    #[error("Failed to load contacts from {}: {reason}", .path.display())]
    DataLoad { path: PathBuf, reason: String },

    /// Write failed because of file permissions
    #[error("{}", messages::file_ops_permission_error(.0))]
    PermissionDenied(PathBuf),

    /// Any other file system failure
    #[error("Could not save data due to the following error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failed
    #[error("Could not save data due to the following error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactsError
pub type ContactsResult<T> = Result<T, ContactsError>;

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{PREFIX_NAME, PREFIX_PHONE};

    #[test]
    fn test_error_display() {
        let err = ParseError::UnknownCommand;
        assert_eq!(err.to_string(), "Unknown command.");

        let err = ParseError::InvalidFormat("list: Lists all contacts.".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid command format.\nlist: Lists all contacts."
        );

        let err = CommandError::DuplicateContact;
        assert_eq!(
            err.to_string(),
            "This contact is already in your contact list."
        );

        let err = ConfigError::InvalidValue {
            var: "CONTEXT_ON_LOAD_ERROR".to_string(),
            reason: "Must be one of: empty, abort".to_string(),
        };
        assert!(err.to_string().contains("CONTEXT_ON_LOAD_ERROR"));
    }

    #[test]
    fn test_duplicate_prefixes_lists_all() {
        let err = ParseError::DuplicatePrefixes(vec![PREFIX_NAME, PREFIX_PHONE]);
        assert_eq!(
            err.to_string(),
            "Multiple values specified for the following single-valued field(s): n/ p/"
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: ParseError = ValidationError::InvalidTag("#x".to_string()).into();
        assert_eq!(
            err.to_string(),
            "\"#x\" is not a valid tag. Tags must be alphanumeric (spaces allowed)."
        );
    }

    #[test]
    fn test_permission_error_names_file() {
        let err = StorageError::PermissionDenied(PathBuf::from("data/contacts.json"));
        assert!(err.to_string().contains("data/contacts.json"));
        assert!(err.to_string().contains("insufficient permissions"));
    }
}
