//! Outbound Services
//!
//! Concrete clients for external systems the domain talks to directly.

pub mod dictionary;

pub use dictionary::{
    DictionaryConfig, FreeDictionarySource, WiktionarySource, WordsApiSource,
    FREE_DICTIONARY_SOURCE, WIKTIONARY_SOURCE, WORDS_API_SOURCE,
};
