//! Note value object.

use super::errors::ValidationError;
use super::string_value_object;

/// Free-form text attached to a contact. Any string is accepted, including
/// the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Note(String);

impl Note {
    /// Create a new Note.
    ///
    /// Notes have no format constraint, so this never fails; it returns a
    /// `Result` so every field type is constructed the same way.
    pub fn new(note: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(note.into()))
    }

    /// Get the note as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

string_value_object!(Note);
