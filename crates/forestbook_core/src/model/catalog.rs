//! Catalog record types.
//!
//! # Responsibility
//! - Define the character/furniture/photo records and their wire shape.
//! - Provide constructors that stamp fresh stable ids.
//!
//! # Invariants
//! - Photo ids are unique within their owning entity's photo list.
//! - Entity ids are unique within their collection.
//! - Entities are never deleted; only photos are removed.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Discriminator for the two photo-owning record kinds.
///
/// Serialized as `character`/`furniture` to match the persisted app state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerKind {
    Character,
    Furniture,
}

impl OwnerKind {
    /// Stable wire label used by FFI payloads and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Furniture => "furniture",
        }
    }

    /// Parses the stable wire label back into a kind.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "character" => Some(Self::Character),
            "furniture" => Some(Self::Furniture),
            _ => None,
        }
    }
}

/// One captured photo. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoItem {
    /// Opaque stable id, unique within the owning photo list.
    pub id: String,
    /// Reference to the image resource on device.
    pub uri: String,
    /// Capture time in epoch milliseconds.
    pub created_at: i64,
}

impl PhotoItem {
    /// Creates a photo stamped with a fresh id and the current time.
    pub fn new(uri: impl Into<String>) -> Self {
        Self::with_created_at(uri, now_epoch_ms())
    }

    /// Creates a photo with a caller-provided capture time.
    ///
    /// Used by import and test paths where the capture time already exists.
    pub fn with_created_at(uri: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: fresh_id(),
            uri: uri.into(),
            created_at,
        }
    }
}

/// Common surface of the two photo-owning record kinds.
///
/// Store mutations and wall aggregation address owners only through this
/// seam, so both collections share one lookup/append/remove path.
pub trait PhotoOwner {
    /// Stable entity id.
    fn id(&self) -> &str;
    /// Display name shown on wall entries and confirmation prompts.
    fn display_name(&self) -> &str;
    /// Photo list in append order.
    fn photos(&self) -> &[PhotoItem];
    /// Mutable photo list for append/remove operations.
    fn photos_mut(&mut self) -> &mut Vec<PhotoItem>;
}

/// A catalogued fictional character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub family: String,
    pub animal_type: String,
    /// Display tags in author order.
    pub tags: Vec<String>,
    /// Star rating, expected range 0-5. Not validated on input.
    pub rating: u8,
    pub description: String,
    /// Photos in append order.
    pub photos: Vec<PhotoItem>,
}

impl Character {
    /// Builds a character from a creation payload with a fresh stable id.
    ///
    /// The photo list starts empty unless the payload supplies one.
    /// Field contents are accepted as-is; no validation is applied.
    pub fn from_new(payload: NewCharacter) -> Self {
        Self {
            id: fresh_id(),
            name: payload.name,
            family: payload.family,
            animal_type: payload.animal_type,
            tags: payload.tags,
            rating: payload.rating,
            description: payload.description,
            photos: payload.photos.unwrap_or_default(),
        }
    }
}

impl PhotoOwner for Character {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn photos(&self) -> &[PhotoItem] {
        &self.photos
    }

    fn photos_mut(&mut self) -> &mut Vec<PhotoItem> {
        &mut self.photos
    }
}

/// A catalogued furniture item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Furniture {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Display tags in author order.
    pub tags: Vec<String>,
    pub description: String,
    /// Photos in append order.
    pub photos: Vec<PhotoItem>,
}

impl Furniture {
    /// Builds a furniture item from a creation payload with a fresh id.
    pub fn from_new(payload: NewFurniture) -> Self {
        Self {
            id: fresh_id(),
            name: payload.name,
            category: payload.category,
            tags: payload.tags,
            description: payload.description,
            photos: payload.photos.unwrap_or_default(),
        }
    }
}

impl PhotoOwner for Furniture {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn photos(&self) -> &[PhotoItem] {
        &self.photos
    }

    fn photos_mut(&mut self) -> &mut Vec<PhotoItem> {
        &mut self.photos
    }
}

/// Creation payload for `Character`. Contents are not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCharacter {
    pub name: String,
    pub family: String,
    pub animal_type: String,
    pub tags: Vec<String>,
    pub rating: u8,
    pub description: String,
    /// Initial photo list; created empty when `None`.
    pub photos: Option<Vec<PhotoItem>>,
}

/// Creation payload for `Furniture`. Contents are not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewFurniture {
    pub name: String,
    pub category: String,
    pub tags: Vec<String>,
    pub description: String,
    /// Initial photo list; created empty when `None`.
    pub photos: Option<Vec<PhotoItem>>,
}

/// The persisted unit: both collections serialized together.
///
/// There is no partial persistence; load and save always move the whole
/// pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogState {
    pub characters: Vec<Character>,
    pub furnitures: Vec<Furniture>,
}

/// Generates a fresh opaque id for entities and photos.
fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current wall-clock time in epoch milliseconds.
fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{Character, Furniture, NewCharacter, NewFurniture, OwnerKind, PhotoItem};

    #[test]
    fn owner_kind_labels_roundtrip() {
        for kind in [OwnerKind::Character, OwnerKind::Furniture] {
            assert_eq!(OwnerKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(OwnerKind::parse("couch"), None);
    }

    #[test]
    fn new_photo_gets_fresh_id_and_timestamp() {
        let first = PhotoItem::new("file:///a.jpg");
        let second = PhotoItem::new("file:///a.jpg");
        assert_ne!(first.id, second.id);
        assert!(first.created_at > 0);
    }

    #[test]
    fn character_from_new_defaults_to_empty_photos() {
        let character = Character::from_new(NewCharacter {
            name: "灰熊老爸".to_string(),
            ..NewCharacter::default()
        });
        assert!(!character.id.is_empty());
        assert!(character.photos.is_empty());
    }

    #[test]
    fn furniture_from_new_keeps_supplied_photos() {
        let photo = PhotoItem::with_created_at("file:///b.jpg", 1_000);
        let furniture = Furniture::from_new(NewFurniture {
            name: "小木桌".to_string(),
            photos: Some(vec![photo.clone()]),
            ..NewFurniture::default()
        });
        assert_eq!(furniture.photos, vec![photo]);
    }
}
