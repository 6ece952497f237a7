// tagsmith/src/protocol/parser.rs

//! Bounds-checked slicing of reply frames.

use crate::types::PageData;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Copy the 4-byte page starting at `idx`.
pub fn page_at(data: &[u8], idx: usize) -> Result<PageData> {
    let s = slice_at(data, idx, 4)?;
    let mut page = [0u8; 4];
    page.copy_from_slice(s);
    Ok(page)
}

/// Copy a 16-byte READ reply starting at `idx`.
pub fn read_block_at(data: &[u8], idx: usize) -> Result<[u8; 16]> {
    let s = slice_at(data, idx, 16)?;
    let mut out = [0u8; 16];
    out.copy_from_slice(s);
    Ok(out)
}
