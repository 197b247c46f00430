//! Domain Services
//!
//! Logic that spans entities and ports.

mod definition_lookup;
mod vocab_view;

pub use definition_lookup::*;
pub use vocab_view::*;
