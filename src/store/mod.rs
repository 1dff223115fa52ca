//! Persistence gateway
//!
//! The service layer talks to storage through the `BookStore` and
//! `ReaderStore` traits; the durable representation is owned entirely by the
//! implementation behind them. `MemoryStore` is the in-process
//! implementation used by the default server wiring and by tests; a
//! SQL-backed implementation would slot in at the same seam.
//!
//! Borrow and return are *conditional updates*: the store applies the
//! transition and reports whether a row actually changed, so the service
//! never runs a separate availability check followed by a write.

mod errors;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

use crate::domain::{Book, BookId, Reader, ReaderId};

/// Storage operations for readers
pub trait ReaderStore: Send + Sync {
    /// Looks up a reader by id.
    fn find_by_id(&self, id: ReaderId) -> StoreResult<Option<Reader>>;

    /// Returns all readers in store order.
    fn find_all(&self) -> StoreResult<Vec<Reader>>;

    /// Persists a new reader, assigning its id.
    fn save(&self, name: &str) -> StoreResult<Reader>;
}

/// Storage operations for books and the borrow relation
pub trait BookStore: Send + Sync {
    /// Looks up a book by id.
    fn find_by_id(&self, id: BookId) -> StoreResult<Option<Book>>;

    /// Returns all books in store order.
    fn find_all(&self) -> StoreResult<Vec<Book>>;

    /// Persists a new book in the available state, assigning its id.
    fn save(&self, name: &str, author: &str) -> StoreResult<Book>;

    /// Id of the reader currently holding the book, `None` when the book is
    /// available or unknown.
    fn reader_of_book(&self, id: BookId) -> StoreResult<Option<ReaderId>>;

    /// All books currently held by the given reader.
    fn books_by_reader(&self, reader: ReaderId) -> StoreResult<Vec<Book>>;

    /// Links `reader` to `book` if and only if the book is available.
    ///
    /// Returns `false` when no row changed: the book is already borrowed or
    /// does not exist. The check and the write happen as one operation.
    fn borrow_if_available(&self, book: BookId, reader: ReaderId) -> StoreResult<bool>;

    /// Clears the reader link if and only if the book is borrowed.
    ///
    /// Returns `false` when no row changed: the book is already available or
    /// does not exist.
    fn return_if_borrowed(&self, book: BookId) -> StoreResult<bool>;
}
