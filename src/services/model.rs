//! Model facade.
//!
//! The model owns the contact collection and the active display filter. The
//! filtered view is computed from both on every read and is never stored.

use crate::error::ContactsResult;
use crate::models::{Contact, ContactFilter, Contacts};

/// The mutation and query surface commands run against.
pub trait Model {
    /// The full contact collection.
    fn contacts(&self) -> &Contacts;

    /// Whether a contact with the same identity exists.
    fn has_contact(&self, contact: &Contact) -> bool;

    /// Append a contact.
    fn add_contact(&mut self, contact: Contact) -> ContactsResult<()>;

    /// Remove an existing contact.
    fn remove_contact(&mut self, contact: &Contact) -> ContactsResult<()>;

    /// Replace `target` with `edited` in place.
    fn update_contact(&mut self, target: &Contact, edited: Contact) -> ContactsResult<()>;

    /// Remove every contact.
    fn clear_contacts(&mut self);

    fn contacts_filter(&self) -> &ContactFilter;

    fn set_contacts_filter(&mut self, filter: ContactFilter);

    /// Contacts matching the active filter, in collection order.
    fn filtered_contacts(&self) -> Vec<&Contact>;
}

/// Default implementation of [`Model`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelManager {
    contacts: Contacts,
    filter: ContactFilter,
}

impl ModelManager {
    /// Create a model over `contacts`, showing all of them.
    pub fn new(contacts: Contacts) -> Self {
        Self {
            contacts,
            filter: ContactFilter::All,
        }
    }
}

impl Model for ModelManager {
    fn contacts(&self) -> &Contacts {
        &self.contacts
    }

    fn has_contact(&self, contact: &Contact) -> bool {
        self.contacts.contains(contact)
    }

    fn add_contact(&mut self, contact: Contact) -> ContactsResult<()> {
        self.contacts.add(contact)
    }

    fn remove_contact(&mut self, contact: &Contact) -> ContactsResult<()> {
        self.contacts.remove(contact)
    }

    fn update_contact(&mut self, target: &Contact, edited: Contact) -> ContactsResult<()> {
        self.contacts.set_contact(target, edited)
    }

    fn clear_contacts(&mut self) {
        self.contacts.clear();
    }

    fn contacts_filter(&self) -> &ContactFilter {
        &self.filter
    }

    fn set_contacts_filter(&mut self, filter: ContactFilter) {
        tracing::debug!(?filter, "Contacts filter updated");
        self.filter = filter;
    }

    fn filtered_contacts(&self) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| self.filter.matches(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Email, Name, Note, Phone};
    use crate::models::NameContainsKeywordsPredicate;
    use std::collections::BTreeSet;

    fn named(name: &str) -> Contact {
        Contact::new(
            Name::new(name).unwrap(),
            Phone::new("12345").unwrap(),
            Email::new("x@example.com").unwrap(),
            Note::default(),
            BTreeSet::new(),
            BTreeSet::new(),
        )
    }

    fn model(names: &[&str]) -> ModelManager {
        let contacts = Contacts::try_from(names.iter().map(|n| named(n)).collect::<Vec<_>>());
        ModelManager::new(contacts.unwrap())
    }

    fn only(keyword: &str) -> ContactFilter {
        ContactFilter::NameKeywords(NameContainsKeywordsPredicate::new(vec![keyword.to_string()]))
    }

    #[test]
    fn test_default_filter_shows_all() {
        let model = model(&["Alice", "Bob"]);
        assert_eq!(model.filtered_contacts().len(), 2);
        assert_eq!(model.contacts_filter(), &ContactFilter::All);
    }

    #[test]
    fn test_filtered_view_tracks_mutations() {
        let mut model = model(&["Alice Tan", "Bob Tan", "Carl"]);
        model.set_contacts_filter(only("tan"));
        assert_eq!(model.filtered_contacts().len(), 2);

        model.remove_contact(&named("Bob Tan")).unwrap();
        let names: Vec<_> = model
            .filtered_contacts()
            .iter()
            .map(|c| c.name().as_str())
            .collect();
        assert_eq!(names, vec!["Alice Tan"]);
    }

    #[test]
    fn test_add_keeps_filter() {
        let mut model = model(&["Alice"]);
        model.set_contacts_filter(only("bob"));
        assert!(model.filtered_contacts().is_empty());

        model.add_contact(named("Bob")).unwrap();
        model.add_contact(named("Carl")).unwrap();
        assert_eq!(model.contacts().len(), 3);
        assert_eq!(model.contacts_filter(), &only("bob"));
        assert_eq!(model.filtered_contacts().len(), 1);
    }

    #[test]
    fn test_clear_contacts() {
        let mut model = model(&["Alice", "Bob"]);
        model.clear_contacts();
        assert!(model.contacts().is_empty());
        assert!(model.filtered_contacts().is_empty());
    }
}
