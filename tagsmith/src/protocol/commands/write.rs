//! WRITE frames for pages and blocks.

use crate::constants::{CMD_WRITE_BLOCK, CMD_WRITE_PAGE};
use crate::types::{BlockData, PageData};

/// Encode WRITE of one 4-byte page.
/// Layout: 0xA2 + page(1) + data(4)
pub fn encode_write_page(page: u8, data: &PageData) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + data.len());
    out.push(CMD_WRITE_PAGE);
    out.push(page);
    out.extend_from_slice(data);
    out
}

/// Encode WRITE of one 16-byte block on a sector-addressed card.
/// Layout: 0xA0 + block(1) + data(16)
pub fn encode_write_block(block: u8, data: &BlockData) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + 16);
    out.push(CMD_WRITE_BLOCK);
    out.push(block);
    out.extend_from_slice(data.as_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_write_page_layout() {
        let out = encode_write_page(0x2b, &[0x31, 0x32, 0x33, 0x34]);
        assert_eq!(out, vec![0xA2, 0x2b, 0x31, 0x32, 0x33, 0x34]);
    }

    #[test]
    fn encode_write_block_layout() {
        let out = encode_write_block(0, &BlockData::from_bytes([0x5A; 16]));
        assert_eq!(out.len(), 18);
        assert_eq!(&out[..2], &[0xA0, 0x00]);
        assert!(out[2..].iter().all(|&b| b == 0x5A));
    }
}
