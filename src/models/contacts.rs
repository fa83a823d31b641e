//! Ordered contact collection that rejects duplicates.

use super::Contact;
use crate::error::{ContactsError, ContactsResult};

/// An ordered list of contacts in which no two entries are the same contact
/// (see [`Contact::is_same_contact`]).
///
/// Insertion order is preserved; replacing a contact keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contacts {
    contacts: Vec<Contact>,
}

impl Contacts {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a contact with the same identity as `contact` is present.
    pub fn contains(&self, contact: &Contact) -> bool {
        self.contacts.iter().any(|c| c.is_same_contact(contact))
    }

    /// Append a contact.
    ///
    /// # Errors
    ///
    /// Returns `ContactsError::Duplicate` if the same contact is already present.
    pub fn add(&mut self, contact: Contact) -> ContactsResult<()> {
        if self.contains(&contact) {
            return Err(ContactsError::Duplicate);
        }
        self.contacts.push(contact);
        Ok(())
    }

    /// Replace `target` with `replacement`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `ContactsError::NotFound` if `target` is not in the collection
    /// - `ContactsError::Duplicate` if `replacement` is the same contact as
    ///   an entry other than `target`
    pub fn set_contact(&mut self, target: &Contact, replacement: Contact) -> ContactsResult<()> {
        let index = self.position(target)?;

        if !target.is_same_contact(&replacement) && self.contains(&replacement) {
            return Err(ContactsError::Duplicate);
        }

        self.contacts[index] = replacement;
        Ok(())
    }

    /// Remove `contact` (matched by full equality).
    ///
    /// # Errors
    ///
    /// Returns `ContactsError::NotFound` if it is not in the collection.
    pub fn remove(&mut self, contact: &Contact) -> ContactsResult<()> {
        let index = self.position(contact)?;
        self.contacts.remove(index);
        Ok(())
    }

    /// Replace the whole collection.
    ///
    /// # Errors
    ///
    /// Returns `ContactsError::Duplicate`, leaving the collection untouched,
    /// if `contacts` holds two entries that are the same contact.
    pub fn set_contacts(&mut self, contacts: Vec<Contact>) -> ContactsResult<()> {
        if !Self::are_unique(&contacts) {
            return Err(ContactsError::Duplicate);
        }
        self.contacts = contacts;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    fn position(&self, contact: &Contact) -> ContactsResult<usize> {
        self.contacts
            .iter()
            .position(|c| c == contact)
            .ok_or_else(|| ContactsError::NotFound(contact.name().to_string()))
    }

    fn are_unique(contacts: &[Contact]) -> bool {
        contacts.iter().enumerate().all(|(i, a)| {
            contacts[i + 1..].iter().all(|b| !a.is_same_contact(b))
        })
    }
}

impl TryFrom<Vec<Contact>> for Contacts {
    type Error = ContactsError;

    fn try_from(contacts: Vec<Contact>) -> ContactsResult<Self> {
        let mut collection = Self::new();
        collection.set_contacts(contacts)?;
        Ok(collection)
    }
}

impl<'a> IntoIterator for &'a Contacts {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
