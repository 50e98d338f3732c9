//! Catalog use-case service.
//!
//! # Responsibility
//! - Own the in-memory character/furniture collections.
//! - Provide the mutation entry points used by screens and the deletion
//!   flow.
//! - Persist the whole state after every effective mutation.
//!
//! # Invariants
//! - Reads observe in-memory state; persistence is best effort.
//! - Missing owner/photo targets are no-ops, never errors.
//! - `delete_photo` routed by `OwnerKind` never touches the other
//!   collection.

use crate::model::catalog::{
    CatalogState, Character, Furniture, NewCharacter, NewFurniture, OwnerKind, PhotoItem,
    PhotoOwner,
};
use crate::model::seed::default_catalog_state;
use crate::store::StateStore;
use log::{info, warn};

/// Where the initial in-memory state came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Persisted state was present and decodable.
    Persisted,
    /// Nothing was stored yet; seed collections were installed silently.
    DefaultsFresh,
    /// Persisted state was unreadable; seed collections were installed
    /// and the error text is carried for a non-blocking user notice.
    DefaultsAfterError(String),
}

/// In-memory owner of both collections, backed by a state store.
pub struct CatalogService<S: StateStore> {
    store: S,
    state: CatalogState,
}

impl<S: StateStore> CatalogService<S> {
    /// Loads persisted state or installs the seed collections.
    ///
    /// Load failure is recovered locally and reported through
    /// `LoadSource`; it is never fatal.
    pub fn load(store: S) -> (Self, LoadSource) {
        let (state, source) = match store.load() {
            Ok(Some(state)) => (state, LoadSource::Persisted),
            Ok(None) => (default_catalog_state(), LoadSource::DefaultsFresh),
            Err(err) => {
                warn!("event=state_load module=service status=error error={err}");
                (
                    default_catalog_state(),
                    LoadSource::DefaultsAfterError(err.to_string()),
                )
            }
        };

        info!(
            "event=state_load module=service status=ok characters={} furnitures={}",
            state.characters.len(),
            state.furnitures.len()
        );
        (Self { store, state }, source)
    }

    /// Read access to the character collection.
    pub fn characters(&self) -> &[Character] {
        &self.state.characters
    }

    /// Read access to the furniture collection.
    pub fn furnitures(&self) -> &[Furniture] {
        &self.state.furnitures
    }

    /// Whole-state read access, for aggregation and persistence checks.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Appends a new character and returns its fresh id.
    pub fn create_character(&mut self, payload: NewCharacter) -> String {
        let character = Character::from_new(payload);
        let id = character.id.clone();
        self.state.characters.push(character);
        self.persist();
        id
    }

    /// Appends a new furniture item and returns its fresh id.
    pub fn create_furniture(&mut self, payload: NewFurniture) -> String {
        let furniture = Furniture::from_new(payload);
        let id = furniture.id.clone();
        self.state.furnitures.push(furniture);
        self.persist();
        id
    }

    /// Appends `photo` to the matching character.
    ///
    /// Returns `false` (no-op) when no character has `owner_id`.
    pub fn add_character_photo(&mut self, owner_id: &str, photo: PhotoItem) -> bool {
        let added = push_photo(&mut self.state.characters, owner_id, photo);
        if added {
            self.persist();
        }
        added
    }

    /// Appends `photo` to the matching furniture item.
    ///
    /// Returns `false` (no-op) when no furniture item has `owner_id`.
    pub fn add_furniture_photo(&mut self, owner_id: &str, photo: PhotoItem) -> bool {
        let added = push_photo(&mut self.state.furnitures, owner_id, photo);
        if added {
            self.persist();
        }
        added
    }

    /// Removes one photo from the matching character by photo id.
    pub fn remove_character_photo(&mut self, owner_id: &str, photo_id: &str) -> bool {
        let removed = drop_photo(&mut self.state.characters, owner_id, photo_id);
        if removed {
            self.persist();
        }
        removed
    }

    /// Removes one photo from the matching furniture item by photo id.
    pub fn remove_furniture_photo(&mut self, owner_id: &str, photo_id: &str) -> bool {
        let removed = drop_photo(&mut self.state.furnitures, owner_id, photo_id);
        if removed {
            self.persist();
        }
        removed
    }

    /// Unified removal entry point used by the deletion flow.
    ///
    /// Dispatches on `owner_kind`, so callers never need to know which
    /// collection holds the owner. Missing targets are no-ops.
    pub fn delete_photo(&mut self, owner_kind: OwnerKind, owner_id: &str, photo_id: &str) -> bool {
        match owner_kind {
            OwnerKind::Character => self.remove_character_photo(owner_id, photo_id),
            OwnerKind::Furniture => self.remove_furniture_photo(owner_id, photo_id),
        }
    }

    /// Best-effort persistence after an effective mutation.
    ///
    /// Failures are logged and swallowed; reads keep observing the
    /// in-memory state. Worst case is stale persisted data.
    fn persist(&self) {
        if let Err(err) = self.store.save(&self.state) {
            warn!("event=state_save module=service status=error error={err}");
        }
    }
}

fn push_photo<T: PhotoOwner>(owners: &mut [T], owner_id: &str, photo: PhotoItem) -> bool {
    match owners.iter_mut().find(|owner| owner.id() == owner_id) {
        Some(owner) => {
            owner.photos_mut().push(photo);
            true
        }
        None => false,
    }
}

fn drop_photo<T: PhotoOwner>(owners: &mut [T], owner_id: &str, photo_id: &str) -> bool {
    let Some(owner) = owners.iter_mut().find(|owner| owner.id() == owner_id) else {
        return false;
    };

    let photos = owner.photos_mut();
    let before = photos.len();
    photos.retain(|photo| photo.id != photo_id);
    photos.len() != before
}
