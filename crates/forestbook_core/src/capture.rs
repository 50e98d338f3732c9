//! Camera capture orchestration.
//!
//! # Responsibility
//! - Define the device capture SPI implemented by the embedding shell.
//! - Route capture results into the owning entity's photo list.
//!
//! # Invariants
//! - Permission denial aborts without touching catalog state.
//! - Cancellation is a normal outcome, not an error.

use crate::model::catalog::{OwnerKind, PhotoItem};
use crate::service::catalog_service::CatalogService;
use crate::store::StateStore;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result of one native capture interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The user completed capture; the uri points at the stored image.
    Captured(String),
    /// The user backed out of the native capture UI.
    Cancelled,
}

/// Capture-layer failures surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Camera permission was not granted; the action must be aborted.
    PermissionDenied,
    /// The device capture stack failed.
    Failed(String),
}

impl Display for CaptureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "camera permission denied"),
            Self::Failed(message) => write!(f, "capture failed: {message}"),
        }
    }
}

impl Error for CaptureError {}

/// Device capture contract implemented by the embedding UI shell.
///
/// The implementation owns the permission check and suspends until the
/// user completes or cancels the native capture UI.
pub trait CaptureSpi {
    fn capture(&mut self) -> Result<CaptureOutcome, CaptureError>;
}

/// Outcome of a full capture-and-append interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureFlowOutcome {
    /// A photo was captured and appended to the owner.
    Added(PhotoItem),
    /// The user cancelled capture; nothing changed.
    Cancelled,
    /// Capture succeeded but the owner no longer exists; nothing changed.
    OwnerMissing,
}

/// Captures one photo and appends it to the addressed owner.
///
/// Permission denial and device failures are returned unchanged and leave
/// catalog state untouched; the caller decides how to surface them.
pub fn capture_photo_into<S: StateStore>(
    catalog: &mut CatalogService<S>,
    spi: &mut dyn CaptureSpi,
    owner_kind: OwnerKind,
    owner_id: &str,
) -> Result<CaptureFlowOutcome, CaptureError> {
    let uri = match spi.capture()? {
        CaptureOutcome::Cancelled => return Ok(CaptureFlowOutcome::Cancelled),
        CaptureOutcome::Captured(uri) => uri,
    };

    let photo = PhotoItem::new(uri);
    let added = match owner_kind {
        OwnerKind::Character => catalog.add_character_photo(owner_id, photo.clone()),
        OwnerKind::Furniture => catalog.add_furniture_photo(owner_id, photo.clone()),
    };

    if !added {
        warn!(
            "event=photo_capture module=capture status=skip owner_kind={} owner_id={} reason=owner_missing",
            owner_kind.as_str(),
            owner_id
        );
        return Ok(CaptureFlowOutcome::OwnerMissing);
    }

    Ok(CaptureFlowOutcome::Added(photo))
}
