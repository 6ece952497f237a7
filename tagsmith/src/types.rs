// tagsmith/src/types.rs

//! Newtypes and small value types shared across the crate.

use crate::{Error, Result};
use derive_more::Display;
use std::convert::TryFrom;
use std::fmt;

/// One 4-byte page of a page-addressed (Ultralight/NTAG) tag.
pub type PageData = [u8; 4];

/// Tag UID - Newtype Pattern (4, 7 または 10 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; 10],
    len: u8,
}

impl Uid {
    /// Identifier lengths defined by ISO/IEC 14443-3 cascade levels.
    pub const VALID_LENGTHS: [usize; 3] = [4, 7, 10];

    /// Same as `Uid::try_from`.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        Self::try_from(bytes)
    }

    /// Parse a hex string such as `04:A1:B2:C3:D4:E5:F6` or `04a1b2c3`.
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = crate::utils::parse_hex(s)
            .map_err(|e| Error::PreconditionViolation(format!("invalid uid: {}", e)))?;
        if bytes.is_empty() {
            return Err(Error::PreconditionViolation("uid is empty".into()));
        }
        Self::try_from(bytes.as_slice())
    }

    /// The identifier bytes, without padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of identifier bytes: 4, 7 or 10.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lowercase hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> std::result::Result<Self, Self::Error> {
        if !Self::VALID_LENGTHS.contains(&bytes.len()) {
            return Err(Error::PreconditionViolation(format!(
                "uid must be 4, 7 or 10 bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 10];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_colon(self.as_bytes()))
    }
}

/// 4-byte access password for NTAG21x password protection.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Password([u8; 4]);

impl Password {
    /// Accepts exactly four bytes of input; anything else is rejected before
    /// the tag is touched.
    pub fn new(s: &str) -> Result<Self> {
        Self::try_from(s.as_bytes())
    }

    /// Wrap raw password bytes.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Raw password bytes as sent in PWD_AUTH.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Password {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> std::result::Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::PreconditionViolation(format!(
                "password must be exactly 4 bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

// Never print the secret itself.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(****)")
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; 16]);

impl BlockData {
    /// Wrap one raw block.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Raw block bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Space separated hex, as in a memory dump.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> std::result::Result<Self, Self::Error> {
        if bytes.len() != 16 {
            return Err(Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Bluetooth device address, stored in the order it is written by humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Wrap an address given most significant byte first.
    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Address bytes, most significant first.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Parse `AA:BB:CC:DD:EE:FF` (17 characters, colon separated).
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let parts: Vec<&str> = s.split(':').collect();
        if s.len() != 17 || parts.len() != 6 {
            return Err(Error::PreconditionViolation(format!(
                "mac address must look like AA:BB:CC:DD:EE:FF, got '{}'",
                s
            )));
        }
        let mut out = [0u8; 6];
        for (slot, part) in out.iter_mut().zip(parts) {
            *slot = u8::from_str_radix(part, 16).map_err(|e| {
                Error::PreconditionViolation(format!("invalid mac octet '{}': {}", part, e))
            })?;
        }
        Ok(Self(out))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_colon(&self.0))
    }
}

/// Low-level technologies a platform NFC stack reports for a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Technology {
    /// ISO/IEC 14443-3 type A.
    NfcA,
    /// ISO/IEC 14443-3 type B.
    NfcB,
    /// FeliCa (JIS X 6319-4).
    NfcF,
    /// ISO/IEC 15693 vicinity cards.
    NfcV,
    /// ISO/IEC 14443-4 APDU transport.
    IsoDep,
    /// Sector-addressed MIFARE Classic/Plus/Pro memory.
    MifareClassic,
    /// Page-addressed Ultralight/NTAG memory.
    MifareUltralight,
    /// Tag already holds an NDEF container.
    Ndef,
    /// Tag can be formatted for NDEF.
    NdefFormatable,
    /// Read-only NFC barcode tags.
    NfcBarcode,
}

impl Technology {
    /// Map a platform technology name to the enum. Accepts either the bare
    /// name (`MifareClassic`) or a dotted class path
    /// (`android.nfc.tech.MifareClassic`).
    pub fn from_name(name: &str) -> Option<Self> {
        let short = name.rsplit('.').next().unwrap_or(name);
        match short {
            "NfcA" => Some(Self::NfcA),
            "NfcB" => Some(Self::NfcB),
            "NfcF" => Some(Self::NfcF),
            "NfcV" => Some(Self::NfcV),
            "IsoDep" => Some(Self::IsoDep),
            "MifareClassic" => Some(Self::MifareClassic),
            "MifareUltralight" => Some(Self::MifareUltralight),
            "Ndef" => Some(Self::Ndef),
            "NdefFormatable" => Some(Self::NdefFormatable),
            "NfcBarcode" => Some(Self::NfcBarcode),
            _ => None,
        }
    }
}

/// Type/size pair the platform reports for a sector-addressed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassicDescriptor {
    /// 0 = Classic, 1 = Plus, 2 = Pro
    pub type_code: u8,
    /// Total memory size in bytes (320, 1024, 2048 or 4096)
    pub size: u16,
}

impl ClassicDescriptor {
    /// `type_code` of MIFARE Classic.
    pub const TYPE_CLASSIC: u8 = 0;
    /// `type_code` of MIFARE Plus.
    pub const TYPE_PLUS: u8 = 1;
    /// `type_code` of MIFARE Pro.
    pub const TYPE_PRO: u8 = 2;

    /// MIFARE Mini, 5 sectors.
    pub const SIZE_MINI: u16 = 320;
    /// 16 sectors.
    pub const SIZE_1K: u16 = 1024;
    /// 32 sectors.
    pub const SIZE_2K: u16 = 2048;
    /// 32 small and 8 large sectors.
    pub const SIZE_4K: u16 = 4096;

    /// Descriptor from the values the platform reports.
    pub fn new(type_code: u8, size: u16) -> Self {
        Self { type_code, size }
    }
}

/// Ultralight variant as reported by the platform, used when the
/// GET_VERSION probe is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UltralightKind {
    /// Original Ultralight (MF0ICU1).
    Ultralight,
    /// Ultralight C with 3DES authentication.
    UltralightC,
    /// Platform could not tell.
    Unknown,
}
