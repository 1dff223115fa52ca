//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures inside the persistence gateway
///
/// These are internal faults, not request-level rejections; the HTTP layer
/// maps them to 5xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A writer panicked while holding the table lock.
    #[error("store lock poisoned")]
    LockPoisoned,
}
