//! Building the initial contact list at startup.

use crate::config::{Config, OnLoadError};
use crate::error::StorageResult;
use crate::models::{sample_contacts, Contacts};
use crate::storage::ContactsStorage;

/// Load the contacts the application starts with.
///
/// A missing data file gives the sample contacts, or an empty list when
/// seeding is disabled. An unreadable data file is handled according to
/// [`Config::on_load_error`].
///
/// # Errors
///
/// Returns the load error when the policy is [`OnLoadError::Abort`].
pub fn load_initial_contacts(
    storage: &dyn ContactsStorage,
    config: &Config,
) -> StorageResult<Contacts> {
    match storage.load() {
        Ok(Some(contacts)) => Ok(contacts),
        Ok(None) if config.seed_sample_data => {
            tracing::info!("Data file not found, starting with sample contacts");
            Ok(sample_contacts())
        }
        Ok(None) => Ok(Contacts::new()),
        Err(e) => match config.on_load_error {
            OnLoadError::Empty => {
                tracing::warn!(error = %e, "Data file could not be loaded, starting with an empty contact list");
                Ok(Contacts::new())
            }
            OnLoadError::Abort => Err(e),
        },
    }
}
