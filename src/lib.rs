//! booklib - a small library lending service
//!
//! Registers readers and books, tracks which reader holds which book, and
//! enforces the borrow/return rules over a REST API.

pub mod cli;
pub mod domain;
pub mod http_server;
pub mod service;
pub mod store;
pub mod validate;
