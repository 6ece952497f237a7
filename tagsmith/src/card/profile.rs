// tagsmith/src/card/profile.rs

//! Chip profile reported for every classified tag.

use crate::card::layout::ChipModel;
use derive_more::Display;
use std::fmt;

/// How a tag's memory is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChipFamily {
    /// 16-byte blocks in authenticated sectors (Mifare Classic)
    SectorAddressed,
    /// 4-byte pages (Ultralight / NTAG)
    PageAddressed,
    /// ISO-DEP smart cards
    SmartCard,
    /// Anything else the platform reports.
    Other,
}

/// NDEF state of the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NdefStatus {
    /// Formatted with write access.
    #[display(fmt = "writable")]
    Writable,
    /// Formatted, write access revoked.
    #[display(fmt = "read-only")]
    ReadOnly,
    /// Blank capability container.
    #[display(fmt = "unformatted")]
    Unformatted,
    /// Memory holds something else.
    #[display(fmt = "not NDEF")]
    NotNdef,
    /// Could not be read.
    #[display(fmt = "unknown")]
    Unknown,
}

/// Classification result shown for every encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChipProfile {
    /// Display name, e.g. `NTAG215`.
    pub name: String,
    /// Addressing family.
    pub family: ChipFamily,
    /// Known NTAG model.
    pub model: Option<ChipModel>,
    /// NDEF state.
    pub ndef: NdefStatus,
    /// NDEF content can be written.
    pub writable: bool,
    /// NDEF data area in bytes where known
    pub capacity: Option<usize>,
}

impl ChipProfile {
    /// Profile with unknown NDEF state.
    pub fn new(name: impl Into<String>, family: ChipFamily) -> Self {
        Self {
            name: name.into(),
            family,
            model: None,
            ndef: NdefStatus::Unknown,
            writable: false,
            capacity: None,
        }
    }

    /// Set the NDEF state; also derives `writable`.
    pub fn with_ndef(mut self, ndef: NdefStatus) -> Self {
        self.ndef = ndef;
        self.writable = matches!(ndef, NdefStatus::Writable | NdefStatus::Unformatted);
        self
    }

    /// Set the NDEF data area size.
    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the NTAG model.
    pub fn with_model(mut self, model: Option<ChipModel>) -> Self {
        self.model = model;
        self
    }

    /// `name | status | N bytes`
    pub fn summary(&self) -> String {
        let mut s = format!("{} | {}", self.name, self.ndef);
        if let Some(cap) = self.capacity {
            s.push_str(&format!(" | {} bytes", cap));
        }
        s
    }
}

impl fmt::Display for ChipProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
