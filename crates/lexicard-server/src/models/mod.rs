//! Lexicard Data Models
//!
//! - Vocab: Flashcard entries and filtered lists
//! - Lookup: Definition suggestions from public dictionaries

mod lookup;
mod vocab;

pub use lookup::*;
pub use vocab::*;
