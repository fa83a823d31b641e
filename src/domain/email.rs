//! Email value object.

use super::errors::ValidationError;
use super::string_value_object;
use once_cell::sync::Lazy;
use regex::Regex;

// local-part@label.label.tld
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[+_.-][A-Za-z0-9]+)*@(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)+[A-Za-z0-9]{2,}$",
    )
    .expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// The accepted shape is permissive: an alphanumeric local part that may be
/// punctuated by single `+`, `_`, `.` or `-` characters, then `@`, then one
/// or more domain labels and a top-level label of at least two characters.
///
/// # Example
///
/// ```
/// use context_contacts::domain::Email;
///
/// let email = Email::new("alexyeoh@example.com").unwrap();
/// assert_eq!(email.as_str(), "alexyeoh@example.com");
/// assert!(Email::new("alexyeoh@example").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    /// Create a new Email, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Whether `email` would be accepted by [`Email::new`].
    pub fn is_valid(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_value_object!(Email);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validates_format() {
        // missing parts
        assert!(Email::new("").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("peterjackexample.com").is_err());
        assert!(Email::new("peterjack@").is_err());
        assert!(Email::new("user@domain").is_err());

        // invalid parts
        assert!(Email::new("peterjack@-").is_err());
        assert!(Email::new("peter jack@example.com").is_err());
        assert!(Email::new("peterjack@exam ple.com").is_err());
        assert!(Email::new("peterjack@@example.com").is_err());
        assert!(Email::new("-peterjack@example.com").is_err());
        assert!(Email::new("peterjack-@example.com").is_err());
        assert!(Email::new("peterjack@example.c").is_err());
        assert!(Email::new("peterjack@example.com-").is_err());
        assert!(Email::new("peter..jack@example.com").is_err());

        // valid
        assert!(Email::new("PeterJack_1190@example.com").is_ok());
        assert!(Email::new("a1+be.d@example1.com").is_ok());
        assert!(Email::new("example_email@foo-domain.sg").is_ok());
        assert!(Email::new("peter_jack@very-very-very-long-example.com").is_ok());
        assert!(Email::new("user.name+tag@example.co.uk").is_ok());
        assert!(Email::new("123@145.com").is_ok());
    }

    #[test]
    fn test_email_serialization() {
        let email = Email::new("user@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"user@example.com\"");
    }

    #[test]
    fn test_email_deserialization_invalid_fails() {
        let result: Result<Email, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
