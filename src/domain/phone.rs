//! Phone value object.

use super::errors::ValidationError;
use super::string_value_object;

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 3;

/// A type-safe wrapper for phone numbers.
///
/// Phone numbers are stored exactly as entered and must consist of digits
/// only.
///
/// # Example
///
/// ```
/// use context_contacts::domain::Phone;
///
/// let phone = Phone::new("87438807").unwrap();
/// assert_eq!(phone.as_str(), "87438807");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Digits only, no formatting characters
    /// - At least three digits
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Whether `phone` would be accepted by [`Phone::new`].
    pub fn is_valid(phone: &str) -> bool {
        phone.len() >= MIN_PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_value_object!(Phone);
