// tagsmith/src/transport/traits.rs

//! The [`Transport`] seam between tag logic and the platform stack.

use crate::types::{ClassicDescriptor, Technology, UltralightKind};
use crate::{Error, Result};

/// Transport trait abstracts the platform NFC stack away from tag logic.
///
/// One value represents one discovered tag. Page reads and writes, block
/// reads and writes, version probes and password authentication all go
/// through `transceive` as raw command frames.
pub trait Transport {
    /// Raw identifier reported by the platform
    fn uid(&self) -> &[u8];

    /// Technologies the platform detected on this tag
    fn technologies(&self) -> &[Technology];

    /// Open an I/O channel using the given technology
    fn connect(&mut self, technology: Technology) -> Result<()>;

    /// Close the channel opened by `connect`
    fn close(&mut self) -> Result<()>;

    /// Send a raw command frame and return the tag's reply
    fn transceive(&mut self, data: &[u8]) -> Result<Vec<u8>>;

    /// Authenticate a sector of a sector-addressed card with key A.
    /// Returns `Ok(false)` when the tag rejects the key.
    fn authenticate_sector_key_a(&mut self, _sector: u8, _key: &[u8; 6]) -> Result<bool> {
        Err(Error::UnsupportedOperation(
            "sector authentication is not available on this transport".into(),
        ))
    }

    /// Type/size reported for sector-addressed cards
    fn classic_descriptor(&self) -> Option<ClassicDescriptor> {
        None
    }

    /// Ultralight variant reported by the platform
    fn ultralight_kind(&self) -> Option<UltralightKind> {
        None
    }

    /// Select acknowledge byte of an ISO-DEP tag
    fn sak(&self) -> Option<u8> {
        None
    }

    /// True when the platform lists `technology` for this tag.
    fn has_technology(&self, technology: Technology) -> bool {
        self.technologies().contains(&technology)
    }
}
