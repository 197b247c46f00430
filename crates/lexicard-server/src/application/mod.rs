//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod vocab_service;

pub use vocab_service::VocabService;
