//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for every contact field: names,
//! phone numbers, email addresses, notes, tags and alternate contacts. Each
//! value object validates at construction time, so an invalid field can never
//! be represented inside a [`Contact`](crate::models::Contact). [`Index`] is
//! the 1-based position users type to pick a displayed contact.

pub mod alternate;
pub mod email;
pub mod errors;
pub mod index;
pub mod name;
pub mod note;
pub mod phone;
pub mod tag;

pub use alternate::AlternateContact;
pub use email::Email;
pub use errors::ValidationError;
pub use index::Index;
pub use name::Name;
pub use note::Note;
pub use phone::Phone;
pub use tag::Tag;

/// Implements string serialization, validated deserialization and `Display`
/// for a single-field string wrapper with a fallible `new`.
macro_rules! string_value_object {
    ($ty:ident) => {
        // Serde support - serialize as string
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        // Serde support - deserialize from string with validation
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                $ty::new(s).map_err(serde::de::Error::custom)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

pub(crate) use string_value_object;
