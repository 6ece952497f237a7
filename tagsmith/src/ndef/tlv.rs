// tagsmith/src/ndef/tlv.rs

//! Type 2 tag TLV blocks wrapping the NDEF message in user memory.

use crate::constants::{TLV_LOCK_CONTROL, TLV_MEMORY_CONTROL, TLV_NDEF, TLV_NULL, TLV_TERMINATOR};
use crate::error::DecodeError;

/// Lengths from this value up use the 3-byte form `FF hi lo`.
const LONG_LENGTH_MARKER: u8 = 0xFF;

/// Number of bytes `wrap` produces for a message of `len` bytes.
pub fn wrapped_len(len: usize) -> usize {
    let header = if len < LONG_LENGTH_MARKER as usize { 2 } else { 4 };
    header + len + 1
}

/// `03 len message FE`
pub fn wrap(message: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(wrapped_len(message.len()));
    out.push(TLV_NDEF);
    if message.len() < LONG_LENGTH_MARKER as usize {
        out.push(message.len() as u8);
    } else {
        out.push(LONG_LENGTH_MARKER);
        out.extend_from_slice(&(message.len() as u16).to_be_bytes());
    }
    out.extend_from_slice(message);
    out.push(TLV_TERMINATOR);
    out
}

/// Locate the NDEF message TLV in a user memory dump.
///
/// Returns `Ok(None)` when the terminator or the end of the area comes
/// first. NULL, lock-control, memory-control and proprietary TLVs are
/// skipped. Any TLV whose value runs past the area is `TruncatedPayload`,
/// so callers reading page by page know to fetch more memory.
pub fn find_ndef(area: &[u8]) -> Result<Option<&[u8]>, DecodeError> {
    let mut pos = 0;
    while pos < area.len() {
        let tag = area[pos];
        pos += 1;
        match tag {
            TLV_NULL => continue,
            TLV_TERMINATOR => return Ok(None),
            _ => {}
        }
        let (len, header) = match area.get(pos..) {
            Some([LONG_LENGTH_MARKER, hi, lo, ..]) => (u16::from_be_bytes([*hi, *lo]) as usize, 3),
            Some([LONG_LENGTH_MARKER, ..]) => {
                return Err(DecodeError::TruncatedPayload {
                    needed: 3,
                    available: area.len() - pos,
                });
            }
            Some([len, ..]) => (*len as usize, 1),
            _ => {
                return Err(DecodeError::TruncatedPayload {
                    needed: 1,
                    available: 0,
                });
            }
        };
        pos += header;
        let available = area.len() - pos;
        if tag == TLV_NDEF && available >= len {
            return Ok(Some(&area[pos..pos + len]));
        }
        if available < len {
            return Err(DecodeError::TruncatedPayload {
                needed: len,
                available,
            });
        }
        if !matches!(tag, TLV_LOCK_CONTROL | TLV_MEMORY_CONTROL) {
            log::debug!("skipping proprietary TLV {:#04x}", tag);
        }
        pos += len;
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_short_message() {
        assert_eq!(wrap(&[0xD1, 0x01]), vec![0x03, 0x02, 0xD1, 0x01, 0xFE]);
        assert_eq!(wrapped_len(2), 5);
    }

    #[test]
    fn wrap_long_message_uses_three_byte_length() {
        let msg = vec![0xAB; 300];
        let w = wrap(&msg);
        assert_eq!(&w[..4], &[0x03, 0xFF, 0x01, 0x2C]);
        assert_eq!(w.len(), wrapped_len(300));
        assert_eq!(find_ndef(&w).unwrap(), Some(&msg[..]));
    }

    #[test]
    fn find_skips_control_tlvs() {
        let area = [
            0x00, // NULL
            0x01, 0x03, 0xA0, 0x10, 0x44, // lock control
            0x02, 0x03, 0x00, 0x00, 0x00, // memory control
            0x03, 0x02, 0xAA, 0xBB, 0xFE,
        ];
        assert_eq!(find_ndef(&area).unwrap(), Some(&[0xAA, 0xBB][..]));
    }

    #[test]
    fn empty_and_missing_messages() {
        assert_eq!(find_ndef(&[0x03, 0x00, 0xFE]).unwrap(), Some(&[][..]));
        assert_eq!(find_ndef(&[0xFE, 0x03, 0x01, 0x00]).unwrap(), None);
        assert_eq!(find_ndef(&[0x00; 8]).unwrap(), None);
    }

    #[test]
    fn truncated_ndef_tlv() {
        assert!(matches!(
            find_ndef(&[0x03, 0x10, 0xD1]),
            Err(DecodeError::TruncatedPayload {
                needed: 16,
                available: 1
            })
        ));
    }

    #[test]
    fn control_tlv_running_past_area_is_truncated() {
        // Memory-control TLV whose value ends beyond the bytes read so far.
        let area = [0x02, 0x06, 0x00, 0x00, 0x00];
        assert!(matches!(
            find_ndef(&area),
            Err(DecodeError::TruncatedPayload {
                needed: 6,
                available: 3
            })
        ));

        let mut longer = area.to_vec();
        longer.extend_from_slice(&[0x00, 0x00, 0x00, 0x03, 0x01, 0xAA, 0xFE]);
        assert_eq!(find_ndef(&longer).unwrap(), Some(&[0xAA][..]));
    }
}
