//! READ frame.

use crate::constants::CMD_READ;

/// Encode READ for the page (or sector-card block) at `address`.
/// The tag answers with 16 bytes starting at that address.
pub fn encode_read(address: u8) -> Vec<u8> {
    vec![CMD_READ, address]
}
