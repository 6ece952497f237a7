// tagsmith/src/protocol/mod.rs

//! Type 2 tag command frames and their replies.

pub mod checksum;
pub mod commands;
pub mod parser;
pub mod responses;

pub use checksum::{bcc, bcc0, bcc1};
pub use commands::Command;
pub use responses::{Response, VersionInfo};
