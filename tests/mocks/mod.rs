//! Test doubles for the storage layer.

mod mock_storage;

pub use mock_storage::MockStorage;
