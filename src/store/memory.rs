//! In-memory store implementation

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{Book, BookId, LendingState, Reader, ReaderId};

use super::errors::{StoreError, StoreResult};
use super::{BookStore, ReaderStore};

/// In-process store backing the default server wiring and the test suites.
///
/// Two tables keyed by id, guarded by a single lock so that the conditional
/// borrow/return updates are atomic. Ids are assigned from monotonic
/// per-table counters starting at 1. Iteration order is ascending id, which
/// is the store order the listing operations expose.
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

struct Tables {
    books: BTreeMap<BookId, Book>,
    readers: BTreeMap<ReaderId, Reader>,
    next_book_id: BookId,
    next_reader_id: ReaderId,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                books: BTreeMap::new(),
                readers: BTreeMap::new(),
                next_book_id: 1,
                next_reader_id: 1,
            }),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderStore for MemoryStore {
    fn find_by_id(&self, id: ReaderId) -> StoreResult<Option<Reader>> {
        Ok(self.read()?.readers.get(&id).cloned())
    }

    fn find_all(&self) -> StoreResult<Vec<Reader>> {
        Ok(self.read()?.readers.values().cloned().collect())
    }

    fn save(&self, name: &str) -> StoreResult<Reader> {
        let mut tables = self.write()?;
        let id = tables.next_reader_id;
        tables.next_reader_id += 1;

        let reader = Reader {
            id,
            name: name.to_string(),
        };
        tables.readers.insert(id, reader.clone());
        Ok(reader)
    }
}

impl BookStore for MemoryStore {
    fn find_by_id(&self, id: BookId) -> StoreResult<Option<Book>> {
        Ok(self.read()?.books.get(&id).cloned())
    }

    fn find_all(&self) -> StoreResult<Vec<Book>> {
        Ok(self.read()?.books.values().cloned().collect())
    }

    fn save(&self, name: &str, author: &str) -> StoreResult<Book> {
        let mut tables = self.write()?;
        let id = tables.next_book_id;
        tables.next_book_id += 1;

        let book = Book {
            id,
            name: name.to_string(),
            author: author.to_string(),
            lending: LendingState::Available,
        };
        tables.books.insert(id, book.clone());
        Ok(book)
    }

    fn reader_of_book(&self, id: BookId) -> StoreResult<Option<ReaderId>> {
        Ok(self
            .read()?
            .books
            .get(&id)
            .and_then(|book| book.lending.reader_id()))
    }

    fn books_by_reader(&self, reader: ReaderId) -> StoreResult<Vec<Book>> {
        Ok(self
            .read()?
            .books
            .values()
            .filter(|book| book.lending.reader_id() == Some(reader))
            .cloned()
            .collect())
    }

    fn borrow_if_available(&self, book: BookId, reader: ReaderId) -> StoreResult<bool> {
        let mut tables = self.write()?;
        match tables.books.get_mut(&book) {
            Some(row) if row.lending.is_available() => {
                row.lending = LendingState::Borrowed(reader);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn return_if_borrowed(&self, book: BookId) -> StoreResult<bool> {
        let mut tables = self.write()?;
        match tables.books.get_mut(&book) {
            Some(row) if !row.lending.is_available() => {
                row.lending = LendingState::Available;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
