// tagsmith/src/protocol/responses/mod.rs

//! Reply decoding, one module per command.

pub mod auth;
pub mod read;
pub mod version;
pub mod write;

pub use auth::decode_pack;
pub use read::decode_read;
pub use version::{VersionInfo, decode_version};
pub use write::decode_ack;

use crate::constants::{CMD_GET_VERSION, CMD_PWD_AUTH, CMD_READ, CMD_WRITE_BLOCK, CMD_WRITE_PAGE};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// GET_VERSION reply.
    Version(VersionInfo),
    /// READ reply.
    Read {
        /// Sixteen bytes from the requested address on.
        data: [u8; 16],
    },
    /// WRITE accepted.
    Ack,
    /// PWD_AUTH accepted.
    Pack {
        /// Password acknowledge stored on the tag.
        pack: [u8; 2],
    },
}

impl Response {
    /// Decode the raw bytes returned by `transceive` for the given command
    /// byte.
    pub fn decode(expected_cmd: u8, data: &[u8]) -> crate::Result<Self> {
        // A lone byte is a 4-bit ACK/NAK for every command except a write,
        // where decode_ack sorts the two apart.
        match expected_cmd {
            CMD_WRITE_PAGE | CMD_WRITE_BLOCK => {
                write::decode_ack(data)?;
                Ok(Self::Ack)
            }
            CMD_GET_VERSION => {
                reject_nak(data)?;
                Ok(Self::Version(version::decode_version(data)?))
            }
            CMD_READ => {
                reject_nak(data)?;
                Ok(Self::Read {
                    data: read::decode_read(data)?,
                })
            }
            CMD_PWD_AUTH => Ok(Self::Pack {
                pack: auth::decode_pack(data)?,
            }),
            _ => Err(crate::Error::UnsupportedOperation(format!(
                "no decoder for command {:#04x}",
                expected_cmd
            ))),
        }
    }
}

fn reject_nak(data: &[u8]) -> crate::Result<()> {
    if let [code] = data {
        return Err(crate::Error::Nak { code: *code });
    }
    Ok(())
}
