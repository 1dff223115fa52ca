//! Domain model for the lending service
//!
//! Two entities, `Book` and `Reader`, identified by store-assigned positive
//! integer ids. The borrow relation is not a separate entity: it is the
//! `LendingState` carried by each book, serialized on the wire as a nullable
//! `reader_id` field.

mod book;
mod reader;

use serde::Serialize;

pub use book::{Book, BookId, LendingState};
pub use reader::{Reader, ReaderId};

/// A borrowed book paired with the reader currently holding it.
///
/// Only borrowed books appear in listings of this type; available books have
/// no reader to pair with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookWithReader {
    #[serde(flatten)]
    pub book: Book,
    pub reader: Reader,
}

/// A reader together with every book they currently hold.
///
/// The book list may be empty; readers are listed whether or not they have
/// anything checked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReaderWithBooks {
    #[serde(flatten)]
    pub reader: Reader,
    pub books: Vec<Book>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_with_reader_flattens_book_fields() {
        let pair = BookWithReader {
            book: Book {
                id: 3,
                name: "1984".to_string(),
                author: "George Orwell".to_string(),
                lending: LendingState::Borrowed(7),
            },
            reader: Reader {
                id: 7,
                name: "Jonny".to_string(),
            },
        };

        let value = serde_json::to_value(&pair).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "1984",
                "author": "George Orwell",
                "reader_id": 7,
                "reader": {"id": 7, "name": "Jonny"}
            })
        );
    }

    #[test]
    fn test_reader_with_books_allows_empty_list() {
        let entry = ReaderWithBooks {
            reader: Reader {
                id: 1,
                name: "Ada".to_string(),
            },
            books: vec![],
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, json!({"id": 1, "name": "Ada", "books": []}));
    }
}
