// tagsmith/src/coordinator/builder.rs

//! Coordinator configuration and its builder.

use crate::constants::DEFAULT_CLASSIC_KEY;
use crate::coordinator::Coordinator;

/// Settings the coordinator applies to every encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinatorConfig {
    /// Key A used to unlock sector 0 of sector-addressed cards
    pub classic_key: [u8; 6],
    /// Write a capability container to blank tags before writing content
    pub format_blank_tags: bool,
    /// Send GET_VERSION while classifying page-addressed tags
    pub probe_version: bool,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            classic_key: DEFAULT_CLASSIC_KEY,
            format_blank_tags: true,
            probe_version: true,
        }
    }
}

/// Helper to construct a Coordinator with optional configuration.
#[derive(Debug, Default)]
pub struct CoordinatorBuilder {
    config: CoordinatorConfig,
}

impl CoordinatorBuilder {
    /// Builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Key A for sector-addressed cards.
    pub fn with_classic_key(mut self, key: [u8; 6]) -> Self {
        self.config.classic_key = key;
        self
    }

    /// Format blank tags before writing.
    pub fn with_format_blank_tags(mut self, enabled: bool) -> Self {
        self.config.format_blank_tags = enabled;
        self
    }

    /// Send GET_VERSION while classifying.
    pub fn with_version_probe(mut self, enabled: bool) -> Self {
        self.config.probe_version = enabled;
        self
    }

    /// Replace every setting at once.
    pub fn with_config(mut self, config: CoordinatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return a coordinator at rest.
    pub fn build(self) -> Coordinator {
        Coordinator::with_config(self.config)
    }
}
