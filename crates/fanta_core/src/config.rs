use std::path::{Path, PathBuf};

use crate::save::{FileStore, RosterStorage, DEFAULT_STORAGE_KEY};

pub const DEFAULT_DATA_DIR: &str = "saves";
pub const DEFAULT_LOW_CREDITS: i64 = 50;

/// Runtime settings for a roster session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Directory holding the stored roster record.
    pub data_dir: PathBuf,
    /// Key the record is stored under.
    pub storage_key: String,
    /// Remaining credits below this are flagged as a warning.
    pub low_credit_threshold: i64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            low_credit_threshold: DEFAULT_LOW_CREDITS,
        }
    }
}

impl RosterConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into(), ..Self::default() }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_low_credit_threshold(mut self, threshold: i64) -> Self {
        self.low_credit_threshold = threshold;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn file_storage(&self) -> RosterStorage<FileStore> {
        RosterStorage::with_key(FileStore::new(&self.data_dir), self.storage_key.clone())
    }
}
