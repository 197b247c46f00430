//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - VocabEntry: A stored flashcard (word, meaning, example, subject)
//! - VocabSnapshot: The filtered entry list pushed to live views
//! - DefinitionCandidate: A normalized dictionary suggestion

mod definition;
mod vocab_entry;

pub use definition::*;
pub use vocab_entry::*;
