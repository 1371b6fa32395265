use super::error::StorageError;
use super::store::KeyValueStore;
use super::DEFAULT_STORAGE_KEY;
use crate::models::TeamRecord;

/// Persistence adapter for the roster record.
///
/// Failures never cross this boundary: they are logged and reported as
/// `false` / `None`, so a broken store cannot corrupt the in-memory roster.
#[derive(Debug, Clone)]
pub struct RosterStorage<S: KeyValueStore> {
    key: String,
    store: S,
}

impl<S: KeyValueStore> RosterStorage<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { key: key.into(), store }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write the record; `false` when encoding or the store fails.
    pub fn save(&mut self, record: &TeamRecord) -> bool {
        match self.try_save(record) {
            Ok(()) => true,
            Err(e) => {
                report("save", &e);
                false
            }
        }
    }

    /// Read the record; `None` when absent or unreadable.
    pub fn load(&self) -> Option<TeamRecord> {
        match self.try_load() {
            Ok(record) => record,
            Err(e) => {
                report("load", &e);
                None
            }
        }
    }

    pub fn clear(&mut self) -> bool {
        match self.store.remove(&self.key) {
            Ok(()) => true,
            Err(e) => {
                report("clear", &e);
                false
            }
        }
    }

    pub fn exists(&self) -> bool {
        self.store.contains(&self.key)
    }

    fn try_save(&mut self, record: &TeamRecord) -> Result<(), StorageError> {
        let data = serde_json::to_vec(record)?;
        self.store.set(&self.key, &data)
    }

    fn try_load(&self) -> Result<Option<TeamRecord>, StorageError> {
        match self.store.get(&self.key)? {
            Some(data) => Ok(Some(serde_json::from_slice(&data)?)),
            None => Ok(None),
        }
    }
}

fn report(op: &str, err: &StorageError) {
    if err.is_recoverable() {
        log::warn!("Roster {} failed (recoverable): {}", op, err);
    } else {
        log::error!("Roster {} failed: {}", op, err);
    }
}
