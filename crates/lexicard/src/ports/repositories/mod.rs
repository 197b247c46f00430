//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod vocab_repository;

pub use vocab_repository::*;
