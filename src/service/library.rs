//! Borrow/return state machine and query operations

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{Book, BookId, BookWithReader, LendingState, Reader, ReaderId, ReaderWithBooks};
use crate::store::{BookStore, ReaderStore};
use crate::validate;

use super::errors::{ServiceError, ServiceResult};

/// The service behind every endpoint.
///
/// Each book cycles between two states, `Available` and `Borrowed`, starting
/// `Available` at creation. The transitions go through the store's
/// conditional updates, so a lost race shows up here as "no row changed" and
/// is reported as the corresponding transition error.
pub struct LibraryService {
    books: Arc<dyn BookStore>,
    readers: Arc<dyn ReaderStore>,
}

impl LibraryService {
    /// Creates a service over the given stores.
    pub fn new(books: Arc<dyn BookStore>, readers: Arc<dyn ReaderStore>) -> Self {
        Self { books, readers }
    }

    /// All registered books, store order.
    pub fn list_books(&self) -> ServiceResult<Vec<Book>> {
        Ok(self.books.find_all()?)
    }

    /// All registered readers, store order.
    pub fn list_readers(&self) -> ServiceResult<Vec<Reader>> {
        Ok(self.readers.find_all()?)
    }

    /// Registers a new reader.
    pub fn add_reader(&self, name: &str) -> ServiceResult<Reader> {
        let name = validate::name(name)?;
        let reader = self.readers.save(name)?;
        info!(reader_id = reader.id, "reader registered");
        Ok(reader)
    }

    /// Registers a new book from a combined "title/author" input.
    pub fn add_book(&self, input: &str) -> ServiceResult<Book> {
        let (title, author) = validate::new_book_input(input)?;
        self.save_book(title, author)
    }

    /// Registers a new book from separate title and author values.
    pub fn save_book(&self, title: &str, author: &str) -> ServiceResult<Book> {
        let title = validate::book_title(title)?;
        let author = validate::name(author)?;
        let book = self.books.save(title, author)?;
        info!(book_id = book.id, "book registered");
        Ok(book)
    }

    /// Reader currently holding the book, `None` when it is in the library.
    pub fn current_reader_of_book(&self, raw_book_id: &str) -> ServiceResult<Option<Reader>> {
        let book_id = validate::single_id(raw_book_id)?;
        self.require_book(book_id)?;

        let Some(reader_id) = self.books.reader_of_book(book_id)? else {
            return Ok(None);
        };
        Ok(Some(self.require_linked_reader(book_id, reader_id)?))
    }

    /// All books currently held by the reader.
    pub fn borrowed_books(&self, raw_reader_id: &str) -> ServiceResult<Vec<Book>> {
        let reader_id = validate::single_id(raw_reader_id)?;
        self.require_reader(reader_id)?;
        Ok(self.books.books_by_reader(reader_id)?)
    }

    /// Borrows from a combined "bookId/readerId" input.
    pub fn borrow_book(&self, input: &str) -> ServiceResult<()> {
        let (book_id, reader_id) = validate::borrow_input(input)?;
        self.borrow(book_id, reader_id)
    }

    /// Borrows with book and reader ids supplied separately.
    pub fn borrow_book_by_ids(&self, raw_book_id: &str, raw_reader_id: &str) -> ServiceResult<()> {
        let book_id = validate::single_id(raw_book_id)?;
        let reader_id = validate::single_id(raw_reader_id)?;
        self.borrow(book_id, reader_id)
    }

    /// Returns a borrowed book to the library.
    pub fn return_book(&self, raw_book_id: &str) -> ServiceResult<()> {
        let book_id = validate::single_id(raw_book_id)?;
        self.require_book(book_id)?;

        if !self.books.return_if_borrowed(book_id)? {
            return Err(ServiceError::AlreadyAvailable(book_id));
        }
        info!(book_id, "book returned");
        Ok(())
    }

    /// Every borrowed book paired with the reader holding it.
    pub fn books_with_readers(&self) -> ServiceResult<Vec<BookWithReader>> {
        let mut pairs = Vec::new();
        for book in self.books.find_all()? {
            if let LendingState::Borrowed(reader_id) = book.lending {
                let reader = self.require_linked_reader(book.id, reader_id)?;
                pairs.push(BookWithReader { book, reader });
            }
        }
        Ok(pairs)
    }

    /// Every reader with their (possibly empty) borrowed-book list.
    pub fn readers_with_books(&self) -> ServiceResult<Vec<ReaderWithBooks>> {
        self.readers
            .find_all()?
            .into_iter()
            .map(|reader| {
                let books = self.books.books_by_reader(reader.id)?;
                Ok(ReaderWithBooks { reader, books })
            })
            .collect()
    }

    fn borrow(&self, book_id: BookId, reader_id: ReaderId) -> ServiceResult<()> {
        self.require_book(book_id)?;
        self.require_reader(reader_id)?;

        // Single conditional update: no window between the availability
        // check and the write for a second borrower to slip through.
        if !self.books.borrow_if_available(book_id, reader_id)? {
            return Err(ServiceError::AlreadyBorrowed(book_id));
        }
        info!(book_id, reader_id, "book borrowed");
        Ok(())
    }

    fn require_book(&self, book_id: BookId) -> ServiceResult<Book> {
        self.books
            .find_by_id(book_id)?
            .ok_or(ServiceError::BookNotFound(book_id))
    }

    fn require_reader(&self, reader_id: ReaderId) -> ServiceResult<Reader> {
        self.readers
            .find_by_id(reader_id)?
            .ok_or(ServiceError::ReaderNotFound(reader_id))
    }

    /// Resolves a reader referenced by a borrowed book. A missing row is a
    /// data-integrity violation, not an empty result.
    fn require_linked_reader(&self, book_id: BookId, reader_id: ReaderId) -> ServiceResult<Reader> {
        match self.readers.find_by_id(reader_id)? {
            Some(reader) => Ok(reader),
            None => {
                error!(
                    book_id,
                    reader_id, "book is linked to a reader row that does not exist"
                );
                Err(ServiceError::DanglingReader {
                    book: book_id,
                    reader: reader_id,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::validate::ValidateError;

    fn service_with_store() -> (LibraryService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let service = LibraryService::new(store.clone(), store.clone());
        (service, store)
    }

    #[test]
    fn test_added_book_is_available() {
        let (service, _) = service_with_store();
        let book = service.add_book("1984/George Orwell").unwrap();
        assert!(book.lending.is_available());
        assert_eq!(book.name, "1984");
        assert_eq!(book.author, "George Orwell");
    }

    #[test]
    fn test_add_book_rejects_malformed_input() {
        let (service, _) = service_with_store();
        for bad in ["1984", "1984/", "/Orwell"] {
            assert!(matches!(
                service.add_book(bad),
                Err(ServiceError::Validate(
                    ValidateError::InvalidInputFormat { .. }
                ))
            ));
        }
    }

    #[test]
    fn test_add_reader_rejects_blank_name() {
        let (service, _) = service_with_store();
        assert!(matches!(
            service.add_reader("  "),
            Err(ServiceError::Validate(ValidateError::InvalidName))
        ));
    }

    #[test]
    fn test_borrow_requires_existing_book_and_reader() {
        let (service, _) = service_with_store();
        let book = service.add_book("Glue/Irvine Welsh").unwrap();

        assert_eq!(
            service.borrow_book("99/1"),
            Err(ServiceError::BookNotFound(99))
        );
        assert_eq!(
            service.borrow_book(&format!("{}/7", book.id)),
            Err(ServiceError::ReaderNotFound(7))
        );
    }

    #[test]
    fn test_borrow_of_borrowed_book_fails_for_any_reader() {
        let (service, _) = service_with_store();
        let book = service.add_book("1984/George Orwell").unwrap();
        service.add_reader("Jonny").unwrap();
        let other = service.add_reader("Yevhenii").unwrap();

        service.borrow_book(&format!("{}/1", book.id)).unwrap();
        assert_eq!(
            service.borrow_book(&format!("{}/{}", book.id, other.id)),
            Err(ServiceError::AlreadyBorrowed(book.id))
        );
    }

    #[test]
    fn test_return_of_available_book_fails() {
        let (service, _) = service_with_store();
        let book = service.add_book("Home/Tony Morrison").unwrap();
        assert_eq!(
            service.return_book(&book.id.to_string()),
            Err(ServiceError::AlreadyAvailable(book.id))
        );
    }

    #[test]
    fn test_current_reader_of_available_book_is_none() {
        let (service, _) = service_with_store();
        let book = service.add_book("Home/Tony Morrison").unwrap();
        assert_eq!(
            service.current_reader_of_book(&book.id.to_string()).unwrap(),
            None
        );
    }

    #[test]
    fn test_dangling_reader_link_is_an_integrity_error() {
        let (service, store) = service_with_store();
        let book = service.add_book("1984/George Orwell").unwrap();

        // Corrupt the table directly: link a reader id that was never saved.
        assert!(store.borrow_if_available(book.id, 42).unwrap());

        assert_eq!(
            service.current_reader_of_book(&book.id.to_string()),
            Err(ServiceError::DanglingReader {
                book: book.id,
                reader: 42
            })
        );
        assert_eq!(
            service.books_with_readers(),
            Err(ServiceError::DanglingReader {
                book: book.id,
                reader: 42
            })
        );
    }

    #[test]
    fn test_borrowed_books_requires_existing_reader() {
        let (service, _) = service_with_store();
        assert_eq!(
            service.borrowed_books("5"),
            Err(ServiceError::ReaderNotFound(5))
        );
    }

    #[test]
    fn test_readers_with_books_includes_empty_handed_readers() {
        let (service, _) = service_with_store();
        let book = service.add_book("1984/George Orwell").unwrap();
        let borrower = service.add_reader("Jonny").unwrap();
        let idle = service.add_reader("Ada").unwrap();

        service
            .borrow_book_by_ids(&book.id.to_string(), &borrower.id.to_string())
            .unwrap();

        let entries = service.readers_with_books().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].reader.id, borrower.id);
        assert_eq!(entries[0].books.len(), 1);
        assert_eq!(entries[1].reader.id, idle.id);
        assert!(entries[1].books.is_empty());
    }

    #[test]
    fn test_books_with_readers_skips_available_books() {
        let (service, _) = service_with_store();
        let borrowed = service.add_book("1984/George Orwell").unwrap();
        service.add_book("Home/Tony Morrison").unwrap();
        let reader = service.add_reader("Jonny").unwrap();

        service
            .borrow_book(&format!("{}/{}", borrowed.id, reader.id))
            .unwrap();

        let pairs = service.books_with_readers().unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].book.id, borrowed.id);
        assert_eq!(pairs[0].reader.id, reader.id);
    }
}
