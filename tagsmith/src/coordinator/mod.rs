// tagsmith/src/coordinator/mod.rs

//! Single-shot action coordinator.
//!
//! At rest every tag encounter is read. Arming an action makes the next
//! encounter perform it instead; afterwards the coordinator is back at
//! rest whatever the result. Only one action can be armed at a time.

pub mod action;
pub mod builder;
pub mod outcome;

pub use action::{ArmSource, ContentSource, CoordinatorState, PendingAction, UidSource};
pub use builder::{CoordinatorBuilder, CoordinatorConfig};
pub use outcome::{Completion, Outcome};

use log::{debug, info, warn};

use crate::card::operations;
use crate::card::{ChipFamily, ChipProfile, Classification, NdefStatus, TagIdentity, classify};
use crate::ndef::TagContent;
use crate::transport::Transport;
use crate::types::{Password, Uid};
use crate::{Error, Result};

/// Owns the armed action, the last read content and the last
/// identifier seen.
#[derive(Debug, Default)]
pub struct Coordinator {
    config: CoordinatorConfig,
    pending: PendingAction,
    cache: Option<TagContent>,
    last_uid: Option<Uid>,
}

impl Coordinator {
    /// Coordinator at rest with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinator at rest with `config`.
    pub fn with_config(config: CoordinatorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Start a [`CoordinatorBuilder`].
    pub fn builder() -> CoordinatorBuilder {
        CoordinatorBuilder::new()
    }

    /// Settings applied to every encounter.
    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Current state; `ArmedRead` at rest.
    pub fn state(&self) -> CoordinatorState {
        self.pending.state()
    }

    /// Action waiting for the next encounter.
    pub fn pending(&self) -> &PendingAction {
        &self.pending
    }

    /// Entry point that armed the pending action.
    pub fn owner(&self) -> Option<ArmSource> {
        self.pending.source()
    }

    /// Last non-empty content read at rest.
    pub fn cached_content(&self) -> Option<&TagContent> {
        self.cache.as_ref()
    }

    /// Identifier of the last tag seen at rest.
    pub fn last_uid(&self) -> Option<&Uid> {
        self.last_uid.as_ref()
    }

    fn ensure_at_rest(&self) -> Result<()> {
        match self.pending.source() {
            None => Ok(()),
            Some(owner) => {
                debug!("rejected: {} is armed", owner);
                Err(Error::Busy)
            }
        }
    }

    fn arm(&mut self, action: PendingAction) {
        info!("armed {}", action.state());
        self.pending = action;
    }

    /// Write `content` to the next tag.
    pub fn arm_write(&mut self, content: TagContent) -> Result<()> {
        self.ensure_at_rest()?;
        content.validate()?;
        self.arm(PendingAction::WriteContent {
            content,
            source: ContentSource::Composed,
        });
        Ok(())
    }

    /// Write the cached content to the next tag.
    pub fn arm_clone(&mut self) -> Result<()> {
        self.ensure_at_rest()?;
        let content = self
            .cache
            .clone()
            .ok_or_else(|| Error::PreconditionViolation("nothing to clone, read a tag first".into()))?;
        self.arm(PendingAction::WriteContent {
            content,
            source: ContentSource::Clone,
        });
        Ok(())
    }

    /// Rewrite the next tag's identifier to the typed hex value.
    pub fn arm_write_uid(&mut self, input: &str) -> Result<()> {
        self.ensure_at_rest()?;
        let target = Uid::parse(input)?;
        self.arm(PendingAction::WriteUid {
            target,
            source: UidSource::TypedInput,
        });
        Ok(())
    }

    /// Rewrite the next tag's identifier to the last one read.
    pub fn arm_write_last_uid(&mut self) -> Result<()> {
        self.ensure_at_rest()?;
        let target = self
            .last_uid
            .ok_or_else(|| Error::PreconditionViolation("no tag has been read yet".into()))?;
        self.arm(PendingAction::WriteUid {
            target,
            source: UidSource::LastRead,
        });
        Ok(())
    }

    /// Permanently lock the next tag. Irreversible.
    pub fn arm_lock(&mut self) -> Result<()> {
        self.ensure_at_rest()?;
        self.arm(PendingAction::Lock);
        Ok(())
    }

    /// Protect the next tag with a 4-character password.
    pub fn arm_set_password(&mut self, password: &str) -> Result<()> {
        self.ensure_at_rest()?;
        let password = Password::new(password)?;
        self.arm(PendingAction::SetPassword { password });
        Ok(())
    }

    /// Remove protection from the next tag, given its password.
    pub fn arm_remove_password(&mut self, password: &str) -> Result<()> {
        self.ensure_at_rest()?;
        let password = Password::new(password)?;
        self.arm(PendingAction::RemovePassword { password });
        Ok(())
    }

    /// Drop whatever is armed, with its parameters.
    pub fn cancel(&mut self) {
        if let Some(owner) = self.pending.source() {
            info!("cancelled {}", owner);
        }
        self.pending = PendingAction::Idle;
    }

    /// Cancel on behalf of one entry point. Fails with `Busy` when a
    /// different entry point owns the armed action.
    pub fn cancel_from(&mut self, source: ArmSource) -> Result<()> {
        match self.pending.source() {
            None => Ok(()),
            Some(owner) if owner == source => {
                self.cancel();
                Ok(())
            }
            Some(_) => Err(Error::Busy),
        }
    }

    /// Forget the last read content. Only at rest.
    pub fn clear_cache(&mut self) -> Result<()> {
        self.ensure_at_rest()?;
        self.cache = None;
        Ok(())
    }

    /// Handle one tag encounter: classify, perform the armed action (or a
    /// read at rest), then return to rest.
    pub fn on_tag(&mut self, tag: &mut dyn Transport) -> Outcome {
        let action = std::mem::take(&mut self.pending);
        let Classification { identity, profile } = classify(tag, self.config.probe_version);
        info!("tag {} ({}) with {} armed", identity, profile.name, action.state());

        let result = self.dispatch(action, tag, &identity, &profile);
        match &result {
            Ok(done) => info!("{}", done),
            Err(e) => warn!("{} failed: {}", profile.name, e),
        }
        Outcome {
            identity,
            profile,
            result,
        }
    }

    fn dispatch(
        &mut self,
        action: PendingAction,
        tag: &mut dyn Transport,
        identity: &TagIdentity,
        profile: &ChipProfile,
    ) -> Result<Completion> {
        match action {
            PendingAction::Idle => self.read(tag, identity, profile),
            PendingAction::WriteContent { content, source } => {
                operations::write_content(tag, &content, self.config.format_blank_tags)?;
                Ok(Completion::Written { source })
            }
            PendingAction::WriteUid { target, .. } => {
                operations::write_uid(tag, &target, &self.config.classic_key)?;
                Ok(Completion::UidWritten { uid: target })
            }
            PendingAction::Lock => {
                operations::lock(tag)?;
                Ok(Completion::Locked)
            }
            PendingAction::SetPassword { password } => {
                operations::set_password(tag, &password)?;
                Ok(Completion::PasswordSet)
            }
            PendingAction::RemovePassword { password } => {
                operations::remove_password(tag, &password)?;
                Ok(Completion::PasswordRemoved)
            }
        }
    }

    fn read(
        &mut self,
        tag: &mut dyn Transport,
        identity: &TagIdentity,
        profile: &ChipProfile,
    ) -> Result<Completion> {
        if let Some(uid) = identity.uid() {
            self.last_uid = Some(uid);
        }
        let readable = profile.family == ChipFamily::PageAddressed
            && matches!(profile.ndef, NdefStatus::Writable | NdefStatus::ReadOnly);
        if !readable {
            return Ok(Completion::Identified);
        }

        let content = operations::read_content(tag)?;
        self.cache = if content.is_empty() {
            None
        } else {
            Some(content.clone())
        };
        Ok(Completion::Read { content })
    }
}
