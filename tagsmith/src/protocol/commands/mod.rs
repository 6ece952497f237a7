// tagsmith/src/protocol/commands/mod.rs

//! Command frames sent to the tag.

pub mod auth;
pub mod read;
pub mod version;
pub mod write;

pub use auth::encode_pwd_auth;
pub use read::encode_read;
pub use version::encode_get_version;
pub use write::{encode_write_block, encode_write_page};

use crate::types::{BlockData, PageData, Password};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    /// `60`: product identification.
    GetVersion,
    /// `30 addr`: four pages or one block.
    Read {
        /// First page or block to read.
        address: u8,
    },
    /// `A2 page data`
    WritePage {
        /// Target page.
        page: u8,
        /// New page content.
        data: PageData,
    },
    /// `A0 block`, then 16 data bytes.
    WriteBlock {
        /// Target block.
        block: u8,
        /// New block content.
        data: BlockData,
    },
    /// `1B pwd`
    PwdAuth {
        /// Password to present.
        password: Password,
    },
}

impl Command {
    /// Return the command byte sent on the wire.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetVersion => crate::constants::CMD_GET_VERSION,
            Self::Read { .. } => crate::constants::CMD_READ,
            Self::WritePage { .. } => crate::constants::CMD_WRITE_PAGE,
            Self::WriteBlock { .. } => crate::constants::CMD_WRITE_BLOCK,
            Self::PwdAuth { .. } => crate::constants::CMD_PWD_AUTH,
        }
    }

    /// Encode the command into the raw bytes handed to `transceive`.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetVersion => encode_get_version(),
            Self::Read { address } => encode_read(*address),
            Self::WritePage { page, data } => encode_write_page(*page, data),
            Self::WriteBlock { block, data } => encode_write_block(*block, data),
            Self::PwdAuth { password } => encode_pwd_auth(password),
        }
    }
}
