// tagsmith/src/ndef/bluetooth.rs

//! Bluetooth out-of-band pairing (`application/vnd.bluetooth.ep.oob`).
//!
//! Payload: total OOB length as 2 bytes little endian, then the device
//! address least significant byte first.

use crate::error::DecodeError;
use crate::types::MacAddress;

/// Record type of a pairing record.
pub const MIME_BLUETOOTH_OOB: &str = "application/vnd.bluetooth.ep.oob";

const OOB_LEN: u16 = 8;

/// Eight-byte OOB payload for `mac`.
pub fn encode_bluetooth(mac: &MacAddress) -> Vec<u8> {
    let mut payload = Vec::with_capacity(OOB_LEN as usize);
    payload.extend_from_slice(&OOB_LEN.to_le_bytes());
    payload.extend(mac.as_bytes().iter().rev());
    payload
}

/// Extra EIR data after the address is ignored.
pub fn decode_bluetooth(payload: &[u8]) -> Result<MacAddress, DecodeError> {
    if payload.len() < OOB_LEN as usize {
        return Err(DecodeError::TruncatedPayload {
            needed: OOB_LEN as usize,
            available: payload.len(),
        });
    }
    let mut addr = [0u8; 6];
    for (dst, src) in addr.iter_mut().zip(payload[2..8].iter().rev()) {
        *dst = *src;
    }
    Ok(MacAddress::from_bytes(addr))
}
