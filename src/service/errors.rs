//! Service error types
//!
//! Everything except `Store` is a request-level rejection: an unknown or
//! malformed identifier, an illegal lending transition, or a corrupt reader
//! link. `Store` wraps internal gateway faults.

use thiserror::Error;

use crate::domain::{BookId, ReaderId};
use crate::store::StoreError;
use crate::validate::ValidateError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by the library service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Input failed a validation check.
    #[error(transparent)]
    Validate(#[from] ValidateError),

    /// No book row exists for the id.
    #[error("book id {0} does not exist")]
    BookNotFound(BookId),

    /// No reader row exists for the id.
    #[error("reader id {0} does not exist")]
    ReaderNotFound(ReaderId),

    /// Borrow attempted on a book that is already checked out.
    #[error("book id {0} is already borrowed")]
    AlreadyBorrowed(BookId),

    /// Return attempted on a book that is already in the library.
    #[error("book id {0} is already in the library")]
    AlreadyAvailable(BookId),

    /// A book's reader link points at a reader row that does not exist.
    /// Surfaced instead of masked: the store contains inconsistent data.
    #[error("book id {book} is linked to missing reader id {reader}")]
    DanglingReader { book: BookId, reader: ReaderId },

    /// Persistence gateway fault.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Whether the failure was caused by the request rather than the system.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ServiceError::Store(_))
    }
}
