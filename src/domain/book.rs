//! Book entity and its lending state

use serde::{Deserialize, Serialize};

use super::ReaderId;

/// Identifier assigned by the store when a book is first saved.
pub type BookId = u64;

/// Lending status of a book.
///
/// A book is either on the shelf or held by exactly one reader. The enum
/// makes a half-linked state (borrowed, but by nobody) unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LendingState {
    /// In the library, free to borrow.
    #[default]
    Available,
    /// Checked out by the given reader.
    Borrowed(ReaderId),
}

impl LendingState {
    /// Whether the book is currently in the library.
    pub fn is_available(&self) -> bool {
        matches!(self, LendingState::Available)
    }

    /// Id of the reader holding the book, if any.
    pub fn reader_id(&self) -> Option<ReaderId> {
        match self {
            LendingState::Available => None,
            LendingState::Borrowed(id) => Some(*id),
        }
    }
}

/// A registered book.
///
/// Newly saved books start out `Available`; the lending state is the only
/// field that changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub author: String,
    /// Serialized as a nullable `reader_id` on the wire.
    #[serde(rename = "reader_id", with = "lending_serde", default)]
    pub lending: LendingState,
}

/// Maps `LendingState` to and from the wire representation: `null` (or an
/// absent field) for `Available`, the reader id for `Borrowed`.
mod lending_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{LendingState, ReaderId};

    pub fn serialize<S: Serializer>(state: &LendingState, ser: S) -> Result<S::Ok, S::Error> {
        match state {
            LendingState::Available => ser.serialize_none(),
            LendingState::Borrowed(id) => ser.serialize_some(id),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<LendingState, D::Error> {
        Ok(match Option::<ReaderId>::deserialize(de)? {
            None => LendingState::Available,
            Some(id) => LendingState::Borrowed(id),
        })
    }
}
