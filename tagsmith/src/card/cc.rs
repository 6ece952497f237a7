// tagsmith/src/card/cc.rs

//! Type 2 capability container.

use crate::card::profile::NdefStatus;
use crate::constants::{CC_ACCESS_READ_ONLY, CC_ACCESS_READ_WRITE, CC_NDEF_MAGIC, CC_VERSION_1_0};
use crate::types::PageData;

/// Type 2 capability container (page 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityContainer {
    /// 0xE1 on an NDEF-formatted tag.
    pub magic: u8,
    /// Mapping version, 0x10 for 1.0.
    pub version: u8,
    /// Data area size divided by 8
    pub size: u8,
    /// High nibble: read access, low nibble: write access
    pub access: u8,
}

impl CapabilityContainer {
    /// Split page 3 into its fields.
    pub fn from_page(page: PageData) -> Self {
        Self {
            magic: page[0],
            version: page[1],
            size: page[2],
            access: page[3],
        }
    }

    /// Container for a freshly formatted tag.
    pub fn formatted(size: u8) -> Self {
        Self {
            magic: CC_NDEF_MAGIC,
            version: CC_VERSION_1_0,
            size,
            access: CC_ACCESS_READ_WRITE,
        }
    }

    /// Page 3 as written to the tag.
    pub fn to_page(self) -> PageData {
        [self.magic, self.version, self.size, self.access]
    }

    /// Magic byte marks an NDEF container.
    pub fn is_ndef(&self) -> bool {
        self.magic == CC_NDEF_MAGIC
    }

    /// All four bytes still zero.
    pub fn is_blank(&self) -> bool {
        self.to_page() == [0; 4]
    }

    /// Usable NDEF area in bytes.
    pub fn data_area_bytes(&self) -> usize {
        self.size as usize * 8
    }

    /// Write access nibble is 0x0.
    pub fn write_access_granted(&self) -> bool {
        self.access & 0x0F == CC_ACCESS_READ_WRITE
    }

    /// Same container with write access revoked.
    pub fn read_only(self) -> Self {
        Self {
            access: CC_ACCESS_READ_ONLY,
            ..self
        }
    }

    /// Status shown in the chip profile.
    pub fn ndef_status(&self) -> NdefStatus {
        match (self.is_ndef(), self.is_blank()) {
            (true, _) if self.write_access_granted() => NdefStatus::Writable,
            (true, _) => NdefStatus::ReadOnly,
            (false, true) => NdefStatus::Unformatted,
            (false, false) => NdefStatus::NotNdef,
        }
    }
}
