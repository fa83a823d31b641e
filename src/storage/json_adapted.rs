//! Serde shapes of the data file.
//!
//! Stored records are plain strings and are validated field by field when
//! converted back into a [`Contact`], so a hand-edited file fails with the
//! same messages the command parsers produce.

use crate::domain::{AlternateContact, Email, Name, Note, Phone, Tag, ValidationError};
use crate::messages;
use crate::models::{Contact, Contacts};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A contact as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAdaptedContact {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub alternates: Vec<String>,
}

impl From<&Contact> for JsonAdaptedContact {
    fn from(contact: &Contact) -> Self {
        Self {
            name: Some(contact.name().to_string()),
            phone: Some(contact.phone().to_string()),
            email: Some(contact.email().to_string()),
            note: Some(contact.note().to_string()),
            tags: contact.tags().iter().map(Tag::to_string).collect(),
            alternates: contact
                .alternates()
                .iter()
                .map(AlternateContact::to_string)
                .collect(),
        }
    }
}

impl JsonAdaptedContact {
    /// Convert into a validated contact.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message for the first missing or invalid field.
    pub fn to_model(&self) -> Result<Contact, String> {
        let name = required(&self.name, "Name", |v| Name::new(v))?;
        let phone = required(&self.phone, "Phone", |v| Phone::new(v))?;
        let email = required(&self.email, "Email", |v| Email::new(v))?;
        let note = required(&self.note, "Note", |v| Note::new(v))?;

        let tags = self
            .tags
            .iter()
            .map(|t| Tag::new(t.as_str()))
            .collect::<Result<BTreeSet<_>, _>>()
            .map_err(|e| e.to_string())?;
        let alternates = self
            .alternates
            .iter()
            .map(|a| AlternateContact::new(a.as_str()))
            .collect::<Result<BTreeSet<_>, _>>()
            .map_err(|e| e.to_string())?;

        Ok(Contact::new(name, phone, email, note, tags, alternates))
    }
}

fn required<T>(
    value: &Option<String>,
    field: &str,
    build: impl FnOnce(String) -> Result<T, ValidationError>,
) -> Result<T, String> {
    let value = value.clone().ok_or_else(|| messages::field_missing(field))?;
    build(value).map_err(|e| e.to_string())
}

/// The whole data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableContacts {
    #[serde(default)]
    pub contacts: Vec<JsonAdaptedContact>,
}

impl From<&Contacts> for JsonSerializableContacts {
    fn from(contacts: &Contacts) -> Self {
        Self {
            contacts: contacts.iter().map(JsonAdaptedContact::from).collect(),
        }
    }
}

impl JsonSerializableContacts {
    /// Convert into a contact collection.
    ///
    /// # Errors
    ///
    /// Returns the message of the first invalid record, or the duplicate
    /// contacts message.
    pub fn to_model(&self) -> Result<Contacts, String> {
        let mut contacts = Contacts::new();
        for adapted in &self.contacts {
            let contact = adapted.to_model()?;
            contacts
                .add(contact)
                .map_err(|_| messages::CONVERT_CONTACTS_DUPLICATE.to_string())?;
        }
        Ok(contacts)
    }
}
