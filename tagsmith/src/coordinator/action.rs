// tagsmith/src/coordinator/action.rs

//! Armed actions and the states they put the coordinator in.

use derive_more::Display;

use crate::ndef::TagContent;
use crate::types::{Password, Uid};

/// Where content armed for writing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentSource {
    /// Built by the user
    Composed,
    /// Copied from the last read
    Clone,
}

/// Where a target identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UidSource {
    /// Entered by the user.
    TypedInput,
    /// Identifier of the last tag read at rest.
    LastRead,
}

/// The entry point that armed an action. Only that entry point may cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArmSource {
    /// Composer screen.
    #[display(fmt = "compose")]
    Compose,
    /// Clone of the last read.
    #[display(fmt = "clone")]
    Clone,
    /// Typed identifier.
    #[display(fmt = "uid input")]
    UidInput,
    /// Identifier of the last read tag.
    #[display(fmt = "last uid")]
    LastUid,
    /// Lock control.
    #[display(fmt = "lock")]
    Lock,
    /// Password setup.
    #[display(fmt = "set password")]
    SetPassword,
    /// Password removal.
    #[display(fmt = "remove password")]
    RemovePassword,
}

/// Externally visible state of the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordinatorState {
    /// Rest state: every encounter is read
    ArmedRead,
    /// Next encounter writes content.
    ArmedWrite,
    /// Next encounter rewrites the identifier.
    ArmedWriteUid,
    /// Next encounter locks the tag.
    ArmedLock,
    /// Next encounter sets a password.
    ArmedSetPassword,
    /// Next encounter removes the password.
    ArmedRemovePassword,
}

/// The single action waiting for the next tag encounter.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PendingAction {
    /// Nothing armed.
    #[default]
    Idle,
    /// Write `content` to the next tag.
    WriteContent {
        /// Validated content to write.
        content: TagContent,
        /// Composed or cloned.
        source: ContentSource,
    },
    /// Rewrite the identifier of the next tag.
    WriteUid {
        /// Identifier to write.
        target: Uid,
        /// Typed or taken from the last read.
        source: UidSource,
    },
    /// Make the next tag permanently read-only.
    Lock,
    /// Protect the next tag with `password`.
    SetPassword {
        /// Password to install.
        password: Password,
    },
    /// Drop protection using the current `password`.
    RemovePassword {
        /// Password currently on the tag.
        password: Password,
    },
}

impl PendingAction {
    /// True at rest.
    pub fn is_idle(&self) -> bool {
        matches!(self, PendingAction::Idle)
    }

    /// State this action puts the coordinator in.
    pub fn state(&self) -> CoordinatorState {
        match self {
            PendingAction::Idle => CoordinatorState::ArmedRead,
            PendingAction::WriteContent { .. } => CoordinatorState::ArmedWrite,
            PendingAction::WriteUid { .. } => CoordinatorState::ArmedWriteUid,
            PendingAction::Lock => CoordinatorState::ArmedLock,
            PendingAction::SetPassword { .. } => CoordinatorState::ArmedSetPassword,
            PendingAction::RemovePassword { .. } => CoordinatorState::ArmedRemovePassword,
        }
    }

    /// Entry point owning this action; `None` at rest.
    pub fn source(&self) -> Option<ArmSource> {
        match self {
            PendingAction::Idle => None,
            PendingAction::WriteContent { source, .. } => Some(match source {
                ContentSource::Composed => ArmSource::Compose,
                ContentSource::Clone => ArmSource::Clone,
            }),
            PendingAction::WriteUid { source, .. } => Some(match source {
                UidSource::TypedInput => ArmSource::UidInput,
                UidSource::LastRead => ArmSource::LastUid,
            }),
            PendingAction::Lock => Some(ArmSource::Lock),
            PendingAction::SetPassword { .. } => Some(ArmSource::SetPassword),
            PendingAction::RemovePassword { .. } => Some(ArmSource::RemovePassword),
        }
    }
}
