//! Domain validation errors.

use std::fmt;

/// Constraint text shown when a name is rejected.
pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";

/// Constraint text shown when a phone number is rejected.
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";

/// Constraint text shown when an email address is rejected.
pub const EMAIL_CONSTRAINTS: &str =
    "Emails must roughly be of the form \"example_email@foo-domain.sg.\"";

/// Constraint text shown when an alternate contact is rejected.
pub const ALTERNATE_CONTACT_CONSTRAINTS: &str = "Alternate contacts should not be blank";

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is invalid.
    InvalidName(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided tag is invalid.
    InvalidTag(String),

    /// The provided alternate contact is invalid.
    InvalidAlternateContact(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(_) => write!(f, "{}", NAME_CONSTRAINTS),
            Self::InvalidPhone(_) => write!(f, "{}", PHONE_CONSTRAINTS),
            Self::InvalidEmail(_) => write!(f, "{}", EMAIL_CONSTRAINTS),
            Self::InvalidTag(tag) => write!(
                f,
                "\"{}\" is not a valid tag. Tags must be alphanumeric (spaces allowed).",
                tag
            ),
            Self::InvalidAlternateContact(_) => write!(f, "{}", ALTERNATE_CONTACT_CONSTRAINTS),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed_constraints() {
        assert_eq!(
            ValidationError::InvalidName("a_b".to_string()).to_string(),
            NAME_CONSTRAINTS
        );
        assert_eq!(
            ValidationError::InvalidPhone("12".to_string()).to_string(),
            PHONE_CONSTRAINTS
        );
        assert_eq!(
            ValidationError::InvalidEmail("x".to_string()).to_string(),
            EMAIL_CONSTRAINTS
        );
    }

    #[test]
    fn test_tag_message_names_the_tag() {
        let err = ValidationError::InvalidTag("#friend".to_string());
        assert_eq!(
            err.to_string(),
            "\"#friend\" is not a valid tag. Tags must be alphanumeric (spaces allowed)."
        );
    }
}
