//! Name value object.

use super::errors::ValidationError;
use super::string_value_object;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("Failed to compile name regex")
});

/// A contact's name.
///
/// Names identify contacts: two contacts with equal names are the same
/// contact, whatever their other fields hold.
///
/// # Example
///
/// ```
/// use context_contacts::domain::Name;
///
/// let name = Name::new("Alex Yeoh").unwrap();
/// assert_eq!(name.as_str(), "Alex Yeoh");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    ///
    /// # Validation Rules
    ///
    /// - Only ASCII letters, digits and spaces
    /// - Must not start with a space (so it cannot be blank)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is invalid.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    /// Whether `name` would be accepted by [`Name::new`].
    pub fn is_valid(name: &str) -> bool {
        NAME_REGEX.is_match(name)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the space separated words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

string_value_object!(Name);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        assert!(Name::new("peter jack").is_ok());
        assert!(Name::new("12345").is_ok());
        assert!(Name::new("peter the 2nd").is_ok());
        assert!(Name::new("Capital Tan").is_ok());
        assert!(Name::new("David Roger Jackson Ray Jr 2nd").is_ok());
    }

    #[test]
    fn test_name_invalid() {
        assert!(Name::new("").is_err());
        assert!(Name::new(" ").is_err());
        assert!(Name::new("^").is_err());
        assert!(Name::new("peter*").is_err());
        assert!(Name::new(" leading space").is_err());
    }

    #[test]
    fn test_name_error_message() {
        let err = Name::new("peter*").unwrap_err();
        assert_eq!(err, ValidationError::InvalidName("peter*".to_string()));
        assert_eq!(err.to_string(), crate::domain::errors::NAME_CONSTRAINTS);
    }

    #[test]
    fn test_name_display_round_trips() {
        let name = Name::new("Alex Yeoh").unwrap();
        assert_eq!(name.to_string(), "Alex Yeoh");
    }

    #[test]
    fn test_name_words() {
        let name = Name::new("Alex  Yeoh").unwrap();
        assert_eq!(name.words().collect::<Vec<_>>(), vec!["Alex", "Yeoh"]);
    }

    #[test]
    fn test_name_deserialization_invalid_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"R@chel\"");
        assert!(result.is_err());
    }
}
