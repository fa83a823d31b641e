use context_contacts::error::{StorageError, StorageResult};
use context_contacts::models::Contacts;
use context_contacts::storage::ContactsStorage;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory storage for testing.
///
/// Clones share state, so a test can keep one handle while the logic owns
/// another, then inspect what was saved and how often each method ran.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockStorage {
    path: PathBuf,
    stored: Arc<Mutex<Option<Contacts>>>,
    fail_load: Arc<Mutex<bool>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockStorage {
    /// Create an empty MockStorage, as if the data file did not exist.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("mock/contacts.json"),
            stored: Arc::new(Mutex::new(None)),
            fail_load: Arc::new(Mutex::new(false)),
            fail_saves: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a MockStorage that already holds `contacts`.
    pub fn with_contacts(contacts: Contacts) -> Self {
        let storage = Self::new();
        *storage.stored.lock().unwrap() = Some(contacts);
        storage
    }

    /// Make every following load fail with a data load error.
    pub fn fail_load(&self, fail: bool) {
        *self.fail_load.lock().unwrap() = fail;
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// The last successfully saved contacts.
    pub fn stored(&self) -> Option<Contacts> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactsStorage for MockStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<Option<Contacts>> {
        self.increment_call_count("load");

        if *self.fail_load.lock().unwrap() {
            return Err(StorageError::DataLoad {
                path: self.path.clone(),
                reason: "Contacts list contains duplicate contact(s).".to_string(),
            });
        }
        Ok(self.stored())
    }

    fn save(&self, contacts: &Contacts) -> StorageResult<()> {
        self.increment_call_count("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::Other,
                "disk full",
            )));
        }
        *self.stored.lock().unwrap() = Some(contacts.clone());
        Ok(())
    }
}
