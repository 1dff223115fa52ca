//! Reader entity

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when a reader is first saved.
pub type ReaderId = u64;

/// A registered library reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reader {
    pub id: ReaderId,
    pub name: String,
}
