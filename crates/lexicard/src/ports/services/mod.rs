//! Service Ports
//!
//! Abstract interfaces for external services.

mod definition_source;
mod vocab_feed;

pub use definition_source::*;
pub use vocab_feed::*;
