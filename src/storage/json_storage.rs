//! JSON file storage.

use super::json_adapted::JsonSerializableContacts;
use super::traits::ContactsStorage;
use crate::error::{StorageError, StorageResult};
use crate::models::Contacts;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Keeps the contact list in one pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonContactsStorage {
    path: PathBuf,
}

impl JsonContactsStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn data_load_error(&self, reason: impl ToString) -> StorageError {
        StorageError::DataLoad {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn write_error(&self, err: io::Error) -> StorageError {
        if err.kind() == io::ErrorKind::PermissionDenied {
            StorageError::PermissionDenied(self.path.clone())
        } else {
            StorageError::Io(err)
        }
    }
}

impl ContactsStorage for JsonContactsStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<Option<Contacts>> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "Data file not found");
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| self.data_load_error(e))?;
        let stored: JsonSerializableContacts =
            serde_json::from_str(&raw).map_err(|e| self.data_load_error(e))?;
        let contacts = stored.to_model().map_err(|e| self.data_load_error(e))?;

        tracing::info!(
            path = %self.path.display(),
            count = contacts.len(),
            "Contacts loaded"
        );
        Ok(Some(contacts))
    }

    fn save(&self, contacts: &Contacts) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let json = serde_json::to_string_pretty(&JsonSerializableContacts::from(contacts))?;
        fs::write(&self.path, json).map_err(|e| self.write_error(e))?;

        tracing::debug!(
            path = %self.path.display(),
            count = contacts.len(),
            "Contacts saved"
        );
        Ok(())
    }
}
