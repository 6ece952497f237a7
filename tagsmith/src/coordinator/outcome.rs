// tagsmith/src/coordinator/outcome.rs

//! Per-encounter results.

use std::fmt;

use crate::Result;
use crate::card::{ChipProfile, TagIdentity};
use crate::coordinator::action::ContentSource;
use crate::ndef::TagContent;
use crate::types::Uid;

/// What a successful encounter did.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// NDEF content read in the rest state
    Read {
        /// Decoded content, possibly empty.
        content: TagContent,
    },
    /// Rest-state encounter with a tag that carries no readable NDEF
    Identified,
    /// Armed content landed on the tag.
    Written {
        /// Composed or cloned.
        source: ContentSource,
    },
    /// Identifier rewritten.
    UidWritten {
        /// Identifier now on the tag.
        uid: Uid,
    },
    /// Tag is permanently read-only.
    Locked,
    /// Password protection enabled.
    PasswordSet,
    /// Password protection disabled.
    PasswordRemoved,
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::Read { content } if content.is_empty() => f.write_str("tag is empty"),
            Completion::Read { content } => f.write_str(&content.summary()),
            Completion::Identified => f.write_str("no NDEF content"),
            Completion::Written {
                source: ContentSource::Composed,
            } => f.write_str("content written"),
            Completion::Written {
                source: ContentSource::Clone,
            } => f.write_str("content cloned"),
            Completion::UidWritten { uid } => write!(f, "UID rewritten to {}", uid),
            Completion::Locked => f.write_str("tag locked permanently"),
            Completion::PasswordSet => f.write_str("password set"),
            Completion::PasswordRemoved => f.write_str("password removed"),
        }
    }
}

/// Result of one tag encounter, always carrying the classification.
#[derive(Debug)]
pub struct Outcome {
    /// Tag as reported by the platform.
    pub identity: TagIdentity,
    /// Classification, present even when the action failed.
    pub profile: ChipProfile,
    /// What the encounter did, or why it failed.
    pub result: Result<Completion>,
}

impl Outcome {
    /// True when the encounter completed.
    pub fn success(&self) -> bool {
        self.result.is_ok()
    }

    /// Message for the user: the completion, or the error.
    pub fn message(&self) -> String {
        match &self.result {
            Ok(completion) => completion.to_string(),
            Err(e) => e.to_string(),
        }
    }

    /// The completion, on success.
    pub fn completion(&self) -> Option<&Completion> {
        self.result.as_ref().ok()
    }

    /// Content decoded by a rest-state read.
    pub fn content(&self) -> Option<&TagContent> {
        match &self.result {
            Ok(Completion::Read { content }) => Some(content),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.profile.name, self.message())
    }
}
