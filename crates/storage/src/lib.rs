use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

/// Handle to the flat-file measurement history.
///
/// Cheap to clone; all clones point at the same file and share one append
/// lock, so concurrent handlers in the same process cannot interleave the
/// load-modify-write cycle. Cross-process writers are not coordinated.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                path: path.into(),
                append_lock: Mutex::new(()),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Serializes appends within this process. A poisoned lock is still
    /// usable: the file itself is rewritten atomically, so a panicked writer
    /// leaves no half-written state behind.
    pub fn append_guard(&self) -> MutexGuard<'_, ()> {
        self.inner
            .append_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
