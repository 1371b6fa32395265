// Roster persistence
// JSON record stored under a single key in a key-value byte store

pub mod error;
pub mod manager;
pub mod store;

pub use error::StorageError;
pub use manager::RosterStorage;
pub use store::{FileStore, KeyValueStore, MemoryStore};

pub const DEFAULT_STORAGE_KEY: &str = "fantacalcio_team";
