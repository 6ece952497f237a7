//! GET_VERSION frame.

use crate::constants::CMD_GET_VERSION;

/// Encode GET_VERSION: a single command byte.
pub fn encode_get_version() -> Vec<u8> {
    vec![CMD_GET_VERSION]
}
