//! Library service
//!
//! Orchestrates validation and store calls; owns the borrow/return state
//! machine. The stores are constructor-supplied so tests can substitute
//! their own implementations.

mod errors;
mod library;

pub use errors::{ServiceError, ServiceResult};
pub use library::LibraryService;
