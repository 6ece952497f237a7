// tagsmith/src/protocol/checksum.rs

//! Identifier check bytes.

use crate::constants::CASCADE_TAG;

/// Block Check Character: XOR over the given identifier bytes.
pub fn bcc(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// BCC0 of a 7-byte identifier: CT ^ UID0 ^ UID1 ^ UID2
pub fn bcc0(uid: &[u8; 7]) -> u8 {
    CASCADE_TAG ^ bcc(&uid[..3])
}

/// BCC1 of a 7-byte identifier: UID3 ^ UID4 ^ UID5 ^ UID6
pub fn bcc1(uid: &[u8; 7]) -> u8 {
    bcc(&uid[3..])
}
