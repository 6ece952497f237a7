// tagsmith/src/lib.rs

//! tagsmith
//!
//! NFC tag engine: NDEF record codec, tag classification, identifier
//! rewriting, password protection and a single-shot action coordinator,
//! all on top of a platform [`Transport`](transport::Transport).
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod coordinator;
pub mod error;
pub mod ndef;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
