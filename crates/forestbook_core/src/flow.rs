//! Confirmation-gated photo deletion flow.
//!
//! # Responsibility
//! - Hold the active photo-wall selection through preview and confirm.
//! - Invoke the unified store removal only after explicit confirmation.
//!
//! # Invariants
//! - No store mutation happens before `confirm`.
//! - `cancel` and `dismiss` never produce side effects.
//! - `confirm` clears the selection even when the target is already gone.

use crate::service::catalog_service::CatalogService;
use crate::store::StateStore;
use crate::wall::PhotoWallEntry;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Observable flow state, in protocol order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteFlowState {
    /// Nothing selected.
    Idle,
    /// A selection is held and rendered large by the UI.
    Previewing,
    /// The yes/no prompt is up; no mutation has happened yet.
    ConfirmPending,
}

/// Out-of-state flow operations. Deletion is irreversible, so wrong-state
/// requests are rejected instead of being coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteFlowError {
    /// The operation needs an active selection.
    NoActiveSelection,
    /// `cancel`/`confirm` are only valid while confirmation is pending.
    NotAwaitingConfirmation,
    /// `request_delete` was repeated while the prompt is already up.
    AlreadyAwaitingConfirmation,
}

impl Display for DeleteFlowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoActiveSelection => write!(f, "no photo is selected"),
            Self::NotAwaitingConfirmation => write!(f, "no deletion is awaiting confirmation"),
            Self::AlreadyAwaitingConfirmation => {
                write!(f, "a deletion is already awaiting confirmation")
            }
        }
    }
}

impl Error for DeleteFlowError {}

/// Deletion flow state machine over one held selection.
#[derive(Debug, Default)]
pub struct DeleteFlow {
    selection: Option<PhotoWallEntry>,
    confirm_pending: bool,
}

impl DeleteFlow {
    /// Creates an idle flow with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current protocol state.
    pub fn state(&self) -> DeleteFlowState {
        match (&self.selection, self.confirm_pending) {
            (None, _) => DeleteFlowState::Idle,
            (Some(_), false) => DeleteFlowState::Previewing,
            (Some(_), true) => DeleteFlowState::ConfirmPending,
        }
    }

    /// The held selection while previewing or confirming.
    pub fn selection(&self) -> Option<&PhotoWallEntry> {
        self.selection.as_ref()
    }

    /// Starts previewing `entry`, replacing any prior selection.
    pub fn select(&mut self, entry: PhotoWallEntry) {
        self.selection = Some(entry);
        self.confirm_pending = false;
    }

    /// Asks for deletion of the previewed photo.
    ///
    /// Returns the owner display name for the confirmation prompt. No
    /// store mutation has occurred yet.
    pub fn request_delete(&mut self) -> Result<&str, DeleteFlowError> {
        match self.state() {
            DeleteFlowState::Idle => Err(DeleteFlowError::NoActiveSelection),
            DeleteFlowState::ConfirmPending => Err(DeleteFlowError::AlreadyAwaitingConfirmation),
            DeleteFlowState::Previewing => {
                self.confirm_pending = true;
                Ok(self
                    .selection
                    .as_ref()
                    .map(|entry| entry.owner_name.as_str())
                    .unwrap_or_default())
            }
        }
    }

    /// Backs out of the pending confirmation, returning to preview.
    pub fn cancel(&mut self) -> Result<(), DeleteFlowError> {
        match self.state() {
            DeleteFlowState::ConfirmPending => {
                self.confirm_pending = false;
                Ok(())
            }
            DeleteFlowState::Previewing => Err(DeleteFlowError::NotAwaitingConfirmation),
            DeleteFlowState::Idle => Err(DeleteFlowError::NoActiveSelection),
        }
    }

    /// Dismisses any selection without deleting. Never a side effect.
    pub fn dismiss(&mut self) {
        self.selection = None;
        self.confirm_pending = false;
    }

    /// Executes the confirmed deletion against the owning collection.
    ///
    /// Returns `true` when a photo was removed. A target that is already
    /// gone is a store-level no-op and the flow still returns to idle.
    pub fn confirm<S: StateStore>(
        &mut self,
        catalog: &mut CatalogService<S>,
    ) -> Result<bool, DeleteFlowError> {
        if self.state() != DeleteFlowState::ConfirmPending {
            return Err(match self.state() {
                DeleteFlowState::Idle => DeleteFlowError::NoActiveSelection,
                _ => DeleteFlowError::NotAwaitingConfirmation,
            });
        }

        let Some(entry) = self.selection.take() else {
            return Err(DeleteFlowError::NoActiveSelection);
        };
        self.confirm_pending = false;

        let removed = catalog.delete_photo(entry.owner_kind, &entry.owner_id, &entry.id);
        info!(
            "event=photo_delete module=flow status=ok owner_kind={} owner_id={} photo_id={} removed={}",
            entry.owner_kind.as_str(),
            entry.owner_id,
            entry.id,
            removed
        );
        Ok(removed)
    }
}
