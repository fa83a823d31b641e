//! AlternateContact value object.

use super::errors::ValidationError;
use super::string_value_object;

/// A secondary way of reaching a contact, such as `Telegram@alexyeoh`.
///
/// The identifier is free-form; it only has to contain something other than
/// whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlternateContact(String);

impl AlternateContact {
    /// Create a new AlternateContact.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAlternateContact` if the text is blank.
    pub fn new(alternate: impl Into<String>) -> Result<Self, ValidationError> {
        let alternate = alternate.into();

        if !Self::is_valid(&alternate) {
            return Err(ValidationError::InvalidAlternateContact(alternate));
        }

        Ok(Self(alternate))
    }

    /// Whether `alternate` would be accepted by [`AlternateContact::new`].
    pub fn is_valid(alternate: &str) -> bool {
        !alternate.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_value_object!(AlternateContact);
