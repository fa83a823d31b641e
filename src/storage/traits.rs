use crate::error::StorageResult;
use crate::models::Contacts;
use std::path::Path;

/// Storage for snapshots of the contact list.
///
/// Abstracts over where contacts are kept so the application can run
/// against a file or an in-memory mock.
pub trait ContactsStorage: Send {
    /// Location of the stored data, for messages.
    fn path(&self) -> &Path;

    /// Read the stored contacts.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DataLoad` if the stored data is malformed or
    /// contains duplicate contacts.
    fn load(&self) -> StorageResult<Option<Contacts>>;

    /// Overwrite the stored contacts with `contacts`.
    fn save(&self, contacts: &Contacts) -> StorageResult<()>;
}
