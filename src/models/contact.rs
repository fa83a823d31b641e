//! Contact model representing a person in the contact list.

use crate::domain::{AlternateContact, Email, Name, Note, Phone, Tag};
use std::collections::BTreeSet;
use std::fmt;

/// A contact in the contact list.
///
/// Contacts are immutable values: editing a contact builds a new `Contact`
/// and swaps it in. `PartialEq` compares every field; use
/// [`Contact::is_same_contact`] for identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    name: Name,
    phone: Phone,
    email: Email,
    note: Note,
    tags: BTreeSet<Tag>,
    alternates: BTreeSet<AlternateContact>,
}

impl Contact {
    /// Create a contact from already validated fields.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        note: Note,
        tags: BTreeSet<Tag>,
        alternates: BTreeSet<AlternateContact>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            note,
            tags,
            alternates,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn alternates(&self) -> &BTreeSet<AlternateContact> {
        &self.alternates
    }

    /// Whether `other` is the same person, i.e. has an equal name.
    ///
    /// This is the identity used for duplicate detection.
    pub fn is_same_contact(&self, other: &Contact) -> bool {
        self.name == other.name
    }
}

/// One-line summary used in command feedback and list output.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Note: {}; Tags: ",
            self.name, self.phone, self.email, self.note
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        write!(f, "; Alternate contacts: ")?;
        for alternate in &self.alternates {
            write!(f, "[{}]", alternate)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, phone: &str, tags: &[&str]) -> Contact {
        Contact::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            Email::new("someone@example.com").unwrap(),
            Note::new("").unwrap(),
            tags.iter().map(|t| Tag::new(*t).unwrap()).collect(),
            BTreeSet::new(),
        )
    }

    #[test]
    fn test_same_contact_ignores_other_fields() {
        let alice = contact("Alice Pauline", "94351253", &["friends"]);
        let other_alice = contact("Alice Pauline", "11111111", &[]);
        assert!(alice.is_same_contact(&other_alice));
        assert_ne!(alice, other_alice);
    }

    #[test]
    fn test_same_contact_is_case_sensitive() {
        let alice = contact("Alice Pauline", "94351253", &[]);
        let lower = contact("alice pauline", "94351253", &[]);
        assert!(!alice.is_same_contact(&lower));
    }

    #[test]
    fn test_full_equality() {
        let a = contact("Bob Choo", "22222222", &["husband", "friends"]);
        let b = contact("Bob Choo", "22222222", &["friends", "husband"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let mut c = contact("Bob Choo", "22222222", &["husband", "friends"]);
        c.alternates.insert(AlternateContact::new("Telegram@bob").unwrap());
        assert_eq!(
            c.to_string(),
            "Bob Choo; Phone: 22222222; Email: someone@example.com; Note: ; \
             Tags: [friends][husband]; Alternate contacts: [Telegram@bob]"
        );
    }
}
