//! Persistence of the contact list.
//!
//! The storage layer reads and writes a snapshot of the whole collection.
//! [`JsonContactsStorage`] keeps it in a single JSON file.

mod json_adapted;
mod json_storage;
mod traits;

pub use json_adapted::{JsonAdaptedContact, JsonSerializableContacts};
pub use json_storage::JsonContactsStorage;
pub use traits::ContactsStorage;
