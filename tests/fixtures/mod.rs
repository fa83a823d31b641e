//! Test fixtures and sample data for integration tests.

#![allow(dead_code)]

use context_contacts::domain::{Email, Name, Note, Phone, Tag};
use context_contacts::models::{Contact, Contacts};
use context_contacts::services::ModelManager;
use std::collections::BTreeSet;

/// Create a contact with the given name and phone, and fixed other fields.
pub fn contact(name: &str, phone: &str) -> Contact {
    contact_with_tags(name, phone, &[])
}

/// Create a contact with tags.
pub fn contact_with_tags(name: &str, phone: &str, tags: &[&str]) -> Contact {
    let email = format!("{}@example.com", name.replace(' ', "").to_lowercase());
    Contact::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new(email).unwrap(),
        Note::default(),
        tags.iter().map(|t| Tag::new(*t).unwrap()).collect(),
        BTreeSet::new(),
    )
}

pub fn alice() -> Contact {
    contact_with_tags("Alice Pauline", "94351253", &["friends"])
}

pub fn benson() -> Contact {
    contact_with_tags("Benson Meier", "98765432", &["owesMoney", "friends"])
}

pub fn carl() -> Contact {
    contact("Carl Kurz", "95352563")
}

pub fn daniel() -> Contact {
    contact_with_tags("Daniel Meier", "87652533", &["friends"])
}

pub fn elle() -> Contact {
    contact("Elle Meyer", "9482224")
}

pub fn fiona() -> Contact {
    contact("Fiona Kunz", "9482427")
}

/// Six typical contacts, in a fixed order.
pub fn typical_contacts() -> Contacts {
    Contacts::try_from(vec![alice(), benson(), carl(), daniel(), elle(), fiona()]).unwrap()
}

/// A model over the typical contacts, showing all of them.
pub fn typical_model() -> ModelManager {
    ModelManager::new(typical_contacts())
}

/// Names of the given contacts, in order.
pub fn names<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> Vec<String> {
    contacts
        .into_iter()
        .map(|c| c.name().to_string())
        .collect()
}
