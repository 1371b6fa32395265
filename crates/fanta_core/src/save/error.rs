use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key: {key}")]
    InvalidKey { key: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            StorageError::Io(_) => true,
            StorageError::Unavailable(_) => true,
            StorageError::Serialization(_) => false,
            StorageError::InvalidKey { .. } => false,
        }
    }
}
