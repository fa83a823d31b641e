//! Data models for the contact list.
//!
//! This module contains the contact entity, the duplicate-rejecting contact
//! collection, display filters, and the sample data used to seed a fresh
//! data file.

pub mod contact;
pub mod contacts;
pub mod filter;
pub mod sample;

pub use contact::Contact;
pub use contacts::Contacts;
pub use filter::{ContactFilter, NameContainsKeywordsPredicate};
pub use sample::sample_contacts;
