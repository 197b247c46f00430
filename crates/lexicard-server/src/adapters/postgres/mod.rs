//! PostgreSQL Repository Implementations

mod vocab_repository;

pub use vocab_repository::PgVocabRepository;
