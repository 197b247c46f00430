//! Lexicard Domain Library
//!
//! Core domain types and interfaces for the Lexicard vocabulary flashcard system.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (VocabEntry, VocabSnapshot, DefinitionCandidate)
//!   - `value_objects/`: Immutable value types (Subject, SubjectFilter, SourceOutcome)
//!   - `services/`: Definition lookup and the single-subscription view
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: Definition sources and the vocabulary change feed
//!
//! - **Services** (`services/`): HTTP adapters for the public dictionaries
//!
//! # Usage
//!
//! ```rust,ignore
//! use lexicard::services::DictionaryConfig;
//!
//! let lookup = DictionaryConfig::default().build_lookup()?;
//! let candidates = lookup.lookup("ephemeral").await;
//! ```

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{
    AttemptStatus, DefinitionCandidate, DefinitionLookup, DomainError, LookupReport,
    NewVocabEntry, SourceAttempt, SourceFault, SourceOutcome, Subject, SubjectFilter, VocabEntry,
    VocabSnapshot, VocabView,
};
pub use ports::{DefinitionSource, Subscription, VocabFeed, VocabRepository};
pub use services::DictionaryConfig;
