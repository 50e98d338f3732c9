//! Photo-wall aggregation.
//!
//! # Responsibility
//! - Merge one collection's photos into a flat, owner-tagged feed.
//! - Keep ordering deterministic: newest first, ties in flatten order.
//!
//! # Invariants
//! - Aggregation is pure; it never mutates the source collections.
//! - The feed is recomputed wholesale on demand, never patched
//!   incrementally (the store can rewrite collections wholesale).

use crate::model::catalog::{CatalogState, OwnerKind, PhotoOwner};
use serde::{Deserialize, Serialize};

/// Which owner kind the photo wall currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallMode {
    Characters,
    Furnitures,
}

impl WallMode {
    /// Stable wire label used by FFI payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Furnitures => "furnitures",
        }
    }

    /// Parses the stable wire label back into a mode.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "characters" => Some(Self::Characters),
            "furnitures" => Some(Self::Furnitures),
            _ => None,
        }
    }
}

/// One aggregated feed entry tagged with its owning record.
///
/// Derived data: deletion always targets the source entity's photo list,
/// and the entry disappears on the next recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoWallEntry {
    pub id: String,
    pub uri: String,
    pub created_at: i64,
    pub owner_name: String,
    pub owner_id: String,
    pub owner_kind: OwnerKind,
}

/// Builds the aggregated, newest-first feed for `mode`.
///
/// Exactly one entry is emitted per photo across entities of the selected
/// kind; the other kind contributes nothing. Equal timestamps keep
/// flatten order (stable sort; no secondary key exists).
pub fn build_photo_wall(mode: WallMode, state: &CatalogState) -> Vec<PhotoWallEntry> {
    let mut entries = match mode {
        WallMode::Characters => flatten(&state.characters, OwnerKind::Character),
        WallMode::Furnitures => flatten(&state.furnitures, OwnerKind::Furniture),
    };

    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    entries
}

fn flatten<T: PhotoOwner>(owners: &[T], owner_kind: OwnerKind) -> Vec<PhotoWallEntry> {
    owners
        .iter()
        .flat_map(|owner| {
            owner.photos().iter().map(move |photo| PhotoWallEntry {
                id: photo.id.clone(),
                uri: photo.uri.clone(),
                created_at: photo.created_at,
                owner_name: owner.display_name().to_string(),
                owner_id: owner.id().to_string(),
                owner_kind,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::WallMode;

    #[test]
    fn mode_labels_roundtrip() {
        for mode in [WallMode::Characters, WallMode::Furnitures] {
            assert_eq!(WallMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(WallMode::parse("photos"), None);
    }
}
