// tagsmith/src/prelude.rs

//! Common imports for users of the crate.

pub use crate::card::{ChipFamily, ChipProfile, Classification, NdefStatus, TagIdentity};
pub use crate::coordinator::{
    ArmSource, Completion, Coordinator, CoordinatorBuilder, CoordinatorConfig, CoordinatorState,
    Outcome, PendingAction,
};
pub use crate::ndef::{Record, TagContent};
pub use crate::protocol::{Command, Response};
pub use crate::transport::Transport;
pub use crate::{
    BlockData, DecodeError, Error, MacAddress, PageData, Password, Result, Technology, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
