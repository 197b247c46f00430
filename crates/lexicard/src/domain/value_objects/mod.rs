//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod source_outcome;
mod subject;

pub use source_outcome::*;
pub use subject::*;
