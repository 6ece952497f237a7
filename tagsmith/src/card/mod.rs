// tagsmith/src/card/mod.rs

//! Tag-level logic on top of a [`Transport`](crate::transport::Transport):
//! sessions, classification, memory layouts and the operations the
//! coordinator dispatches to.

pub mod cc;
pub mod classify;
pub mod identity;
pub mod layout;
pub mod operations;
pub mod profile;
pub mod session;

pub use cc::CapabilityContainer;
pub use classify::{Classification, classify};
pub use identity::TagIdentity;
pub use layout::{ChipModel, NTAG_LAYOUTS, NtagLayout, PasswordPages};
pub use profile::{ChipFamily, ChipProfile, NdefStatus};
pub use session::Session;

use crate::transport::Transport;
use crate::types::Technology;
use crate::{Error, Result};

/// Fail unless the tag exposes page-addressed memory.
pub(crate) fn require_page_addressed(tag: &dyn Transport, operation: &str) -> Result<()> {
    if tag.has_technology(Technology::MifareUltralight) {
        return Ok(());
    }
    let family = if tag.has_technology(Technology::MifareClassic) {
        "sector-addressed cards"
    } else {
        "this tag"
    };
    Err(Error::UnsupportedChipFamily(format!(
        "{} is not supported on {}",
        operation, family
    )))
}
