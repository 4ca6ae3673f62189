//! Store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the product table.
///
/// `NotFound` and `DuplicateName` are expected outcomes of normal
/// requests; the rest indicate the snapshot file or the lock is in
/// trouble and surface to clients as internal errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row for the given id
    #[error("product {0} not found")]
    NotFound(u64),

    /// Uniqueness constraint on `name` rejected the write
    #[error("product name '{0}' already exists")]
    DuplicateName(String),

    /// Snapshot read or write failed
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file exists but does not parse
    #[error("store snapshot is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// A writer panicked while holding the table lock
    #[error("store lock poisoned")]
    LockPoisoned,
}
