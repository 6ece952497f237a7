//! PWD_AUTH frame.

use crate::constants::CMD_PWD_AUTH;
use crate::types::Password;

/// Encode PWD_AUTH: 0x1B followed by the 4 password bytes.
pub fn encode_pwd_auth(password: &Password) -> Vec<u8> {
    let mut out = Vec::with_capacity(5);
    out.push(CMD_PWD_AUTH);
    out.extend_from_slice(password.as_bytes());
    out
}
