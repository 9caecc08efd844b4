use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Corrupt history file at record {row}: {source}")]
    Corrupt { row: usize, source: csv::Error },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// True for failures of the storage medium itself, as opposed to bad
    /// caller input. Both corrupt data and I/O trouble count: neither can be
    /// fixed by changing the request.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            StorageError::Io(_) | StorageError::Csv(_) | StorageError::Corrupt { .. }
        )
    }
}
