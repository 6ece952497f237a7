// tagsmith/src/protocol/responses/version.rs

//! GET_VERSION reply.

use crate::constants::{NXP_VENDOR_ID, VERSION_LEN};
use crate::protocol::parser;
use crate::Result;

/// Decoded GET_VERSION reply.
/// Layout: header(1) + vendor(1) + type(1) + subtype(1) + major(1) + minor(1)
/// + storage_size(1) + protocol(1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    /// 0x04 for NXP.
    pub vendor_id: u8,
    /// 0x04 for NTAG.
    pub product_type: u8,
    /// Vendor-specific subtype, 0x02 for 50 pF parts.
    pub product_subtype: u8,
    /// Major product version.
    pub major_version: u8,
    /// Minor product version.
    pub minor_version: u8,
    /// Storage size code, e.g. 0x0F for NTAG213.
    pub storage_size: u8,
    /// 0x03 for ISO/IEC 14443-3.
    pub protocol_type: u8,
}

impl VersionInfo {
    /// True when the vendor byte is NXP's.
    pub fn is_nxp(&self) -> bool {
        self.vendor_id == NXP_VENDOR_ID
    }

    /// Byte layout as returned by the tag, header byte included.
    pub fn to_bytes(&self) -> [u8; VERSION_LEN] {
        [
            0x00,
            self.vendor_id,
            self.product_type,
            self.product_subtype,
            self.major_version,
            self.minor_version,
            self.storage_size,
            self.protocol_type,
        ]
    }
}

/// Decode the 8-byte GET_VERSION reply.
pub fn decode_version(data: &[u8]) -> Result<VersionInfo> {
    parser::ensure_len(data, VERSION_LEN)?;
    Ok(VersionInfo {
        vendor_id: parser::byte_at(data, 1)?,
        product_type: parser::byte_at(data, 2)?,
        product_subtype: parser::byte_at(data, 3)?,
        major_version: parser::byte_at(data, 4)?,
        minor_version: parser::byte_at(data, 5)?,
        storage_size: parser::byte_at(data, 6)?,
        protocol_type: parser::byte_at(data, 7)?,
    })
}
