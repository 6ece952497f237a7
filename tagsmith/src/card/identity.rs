// tagsmith/src/card/identity.rs

//! Per-encounter tag identity.

use crate::protocol::VersionInfo;
use crate::transport::Transport;
use crate::types::{Technology, Uid};
use std::fmt;

/// Snapshot of one tag encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagIdentity {
    uid: Vec<u8>,
    technologies: Vec<Technology>,
    version: Option<VersionInfo>,
}

impl TagIdentity {
    /// Identity from raw platform values.
    pub fn new(uid: &[u8], technologies: &[Technology]) -> Self {
        Self {
            uid: uid.to_vec(),
            technologies: technologies.to_vec(),
            version: None,
        }
    }

    /// Identity of the tag behind `tag`.
    pub fn capture(tag: &dyn Transport) -> Self {
        Self::new(tag.uid(), tag.technologies())
    }

    /// Attach a GET_VERSION reply.
    pub fn with_version(mut self, version: VersionInfo) -> Self {
        self.version = Some(version);
        self
    }

    /// Identifier as reported, whatever its length.
    pub fn uid_bytes(&self) -> &[u8] {
        &self.uid
    }

    /// The identifier as a `Uid`, when it has a standard length.
    pub fn uid(&self) -> Option<Uid> {
        Uid::new(&self.uid).ok()
    }

    /// Technologies in platform order.
    pub fn technologies(&self) -> &[Technology] {
        &self.technologies
    }

    /// True when the tag reports `technology`.
    pub fn has(&self, technology: Technology) -> bool {
        self.technologies.contains(&technology)
    }

    /// GET_VERSION reply, when probed.
    pub fn version(&self) -> Option<&VersionInfo> {
        self.version.as_ref()
    }

    /// Technologies joined for display, e.g. `NfcA, IsoDep`.
    pub fn technology_list(&self) -> String {
        self.technologies
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for TagIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]",
            crate::utils::bytes_to_hex_colon(&self.uid),
            self.technology_list()
        )
    }
}
