// tagsmith/src/protocol/responses/write.rs

//! WRITE acknowledgement.

use crate::constants::ACK;
use crate::{Error, Result};

/// Decode a WRITE reply. Platforms either strip the 4-bit ACK (empty reply)
/// or hand it through as a single byte.
pub fn decode_ack(data: &[u8]) -> Result<()> {
    match data {
        [] => Ok(()),
        [code] if code & 0x0F == ACK => Ok(()),
        [code] => Err(Error::Nak { code: *code }),
        _ => Err(Error::InvalidLength {
            expected: 1,
            actual: data.len(),
        }),
    }
}
