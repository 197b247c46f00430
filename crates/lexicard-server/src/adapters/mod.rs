//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod feed;
#[cfg(test)]
pub mod memory;
pub mod postgres;

// Re-exports
pub use feed::BroadcastVocabFeed;
pub use postgres::PgVocabRepository;
