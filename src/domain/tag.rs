//! Tag value object.

use super::errors::ValidationError;
use super::string_value_object;

/// A label attached to a contact. Tags are alphanumeric and may contain
/// spaces. A contact holds a set of tags, so equal tags collapse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    /// Create a new Tag.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTag` carrying the rejected text if it
    /// is empty or contains anything besides ASCII letters, digits and spaces.
    pub fn new(tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();

        if !Self::is_valid(&tag) {
            return Err(ValidationError::InvalidTag(tag));
        }

        Ok(Self(tag))
    }

    /// Whether `tag` would be accepted by [`Tag::new`].
    pub fn is_valid(tag: &str) -> bool {
        !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_value_object!(Tag);
