//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for the UI: envelopes, not exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every call loads and persists the whole catalog state; the FFI layer
//!   itself holds no collection state.

use forestbook_core::db::open_db;
use forestbook_core::{
    build_photo_wall, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, CatalogService, Character, Furniture, LoadSource, NewCharacter,
    NewFurniture, OwnerKind, PhotoItem, SqliteStateStore, WallMode,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const CATALOG_DB_FILE_NAME: &str = "forestbook_catalog.sqlite3";
static CATALOG_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory fail.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for catalog mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Created record id, when the operation creates one.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl CatalogActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Bootstrap response describing where the initial state came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapResponse {
    pub ok: bool,
    /// True when seed collections were installed instead of stored data.
    pub seeded_defaults: bool,
    /// Load error text for the non-blocking informational alert, if any.
    pub load_error: Option<String>,
    pub character_count: u32,
    pub furniture_count: u32,
    pub message: String,
}

/// One photo row inside a list-screen card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoView {
    pub id: String,
    pub uri: String,
    pub created_at_epoch_ms: i64,
}

/// List-screen projection of one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterView {
    pub id: String,
    pub name: String,
    pub family: String,
    pub animal_type: String,
    pub tags: Vec<String>,
    pub rating: u8,
    pub description: String,
    pub photos: Vec<PhotoView>,
}

/// List-screen projection of one furniture item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FurnitureView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub tags: Vec<String>,
    pub description: String,
    pub photos: Vec<PhotoView>,
}

/// Character list response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharactersListResponse {
    pub items: Vec<CharacterView>,
    pub message: String,
}

/// Furniture list response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FurnituresListResponse {
    pub items: Vec<FurnitureView>,
    pub message: String,
}

/// One aggregated photo-wall entry for grid display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallItemView {
    pub id: String,
    pub uri: String,
    pub created_at_epoch_ms: i64,
    pub owner_name: String,
    pub owner_id: String,
    /// `character` or `furniture`.
    pub owner_kind: String,
}

/// Photo-wall list response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallListResponse {
    pub ok: bool,
    pub items: Vec<WallItemView>,
    pub message: String,
}

/// Opens the catalog and reports where the initial state came from.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - `load_error` drives the non-blocking "using defaults" alert.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_bootstrap() -> BootstrapResponse {
    let db_path = resolve_catalog_db_path();
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            return BootstrapResponse {
                ok: false,
                seeded_defaults: false,
                load_error: Some(err.to_string()),
                character_count: 0,
                furniture_count: 0,
                message: format!("catalog_bootstrap failed: {err}"),
            };
        }
    };

    let store = match SqliteStateStore::try_new(&conn) {
        Ok(store) => store,
        Err(err) => {
            return BootstrapResponse {
                ok: false,
                seeded_defaults: false,
                load_error: Some(err.to_string()),
                character_count: 0,
                furniture_count: 0,
                message: format!("catalog_bootstrap failed: {err}"),
            };
        }
    };

    let (catalog, source) = CatalogService::load(store);
    let (seeded_defaults, load_error) = match source {
        LoadSource::Persisted => (false, None),
        LoadSource::DefaultsFresh => (true, None),
        LoadSource::DefaultsAfterError(message) => (true, Some(message)),
    };

    BootstrapResponse {
        ok: true,
        seeded_defaults,
        load_error,
        character_count: catalog.characters().len() as u32,
        furniture_count: catalog.furnitures().len() as u32,
        message: "Catalog ready.".to_string(),
    }
}

/// Creates a character from the list-screen form.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; field contents are accepted as-is.
#[flutter_rust_bridge::frb(sync)]
pub fn character_create(
    name: String,
    family: String,
    animal_type: String,
    tags: Vec<String>,
    rating: u8,
    description: String,
) -> CatalogActionResponse {
    with_catalog(|catalog| {
        let id = catalog.create_character(NewCharacter {
            name,
            family,
            animal_type,
            tags,
            rating,
            description,
            photos: None,
        });
        CatalogActionResponse::success("Character created.", Some(id))
    })
    .unwrap_or_else(|err| CatalogActionResponse::failure(format!("character_create failed: {err}")))
}

/// Creates a furniture item from the list-screen form.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; field contents are accepted as-is.
#[flutter_rust_bridge::frb(sync)]
pub fn furniture_create(
    name: String,
    category: String,
    tags: Vec<String>,
    description: String,
) -> CatalogActionResponse {
    with_catalog(|catalog| {
        let id = catalog.create_furniture(NewFurniture {
            name,
            category,
            tags,
            description,
            photos: None,
        });
        CatalogActionResponse::success("Furniture created.", Some(id))
    })
    .unwrap_or_else(|err| CatalogActionResponse::failure(format!("furniture_create failed: {err}")))
}

/// Lists all characters for the list screen.
#[flutter_rust_bridge::frb(sync)]
pub fn characters_list() -> CharactersListResponse {
    match with_catalog(|catalog| catalog.characters().iter().map(to_character_view).collect()) {
        Ok(items) => CharactersListResponse {
            items,
            message: "OK".to_string(),
        },
        Err(err) => CharactersListResponse {
            items: Vec::new(),
            message: format!("characters_list failed: {err}"),
        },
    }
}

/// Lists all furniture items for the list screen.
#[flutter_rust_bridge::frb(sync)]
pub fn furnitures_list() -> FurnituresListResponse {
    match with_catalog(|catalog| catalog.furnitures().iter().map(to_furniture_view).collect()) {
        Ok(items) => FurnituresListResponse {
            items,
            message: "OK".to_string(),
        },
        Err(err) => FurnituresListResponse {
            items: Vec::new(),
            message: format!("furnitures_list failed: {err}"),
        },
    }
}

/// Appends a captured photo to the addressed owner.
///
/// The capture itself runs on the Dart side; this call receives the
/// stored image uri and stamps id + timestamp in core.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Unknown owner ids are reported as a failed envelope, not an error.
#[flutter_rust_bridge::frb(sync)]
pub fn photo_add(owner_kind: String, owner_id: String, uri: String) -> CatalogActionResponse {
    let Some(kind) = OwnerKind::parse(&owner_kind) else {
        return CatalogActionResponse::failure(format!("unknown owner kind `{owner_kind}`"));
    };

    with_catalog(|catalog| {
        let photo = PhotoItem::new(uri);
        let photo_id = photo.id.clone();
        let added = match kind {
            OwnerKind::Character => catalog.add_character_photo(&owner_id, photo),
            OwnerKind::Furniture => catalog.add_furniture_photo(&owner_id, photo),
        };
        if added {
            CatalogActionResponse::success("Photo added.", Some(photo_id))
        } else {
            CatalogActionResponse::failure(format!("owner `{owner_id}` not found"))
        }
    })
    .unwrap_or_else(|err| CatalogActionResponse::failure(format!("photo_add failed: {err}")))
}

/// Builds the aggregated photo wall for `mode` (`characters|furnitures`).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Entries are newest-first; ties keep collection order.
#[flutter_rust_bridge::frb(sync)]
pub fn wall_list(mode: String) -> WallListResponse {
    let Some(mode) = WallMode::parse(&mode) else {
        return WallListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("unknown wall mode `{mode}`"),
        };
    };

    match with_catalog(|catalog| {
        build_photo_wall(mode, catalog.state())
            .into_iter()
            .map(|entry| WallItemView {
                id: entry.id,
                uri: entry.uri,
                created_at_epoch_ms: entry.created_at,
                owner_name: entry.owner_name,
                owner_id: entry.owner_id,
                owner_kind: entry.owner_kind.as_str().to_string(),
            })
            .collect::<Vec<_>>()
    }) {
        Ok(items) => {
            let message = if items.is_empty() {
                "No photos yet.".to_string()
            } else {
                format!("{} photo(s).", items.len())
            };
            WallListResponse {
                ok: true,
                items,
                message,
            }
        }
        Err(err) => WallListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("wall_list failed: {err}"),
        },
    }
}

/// Deletes one photo after native confirmation.
///
/// The yes/no prompt is native UI; by the time this call arrives the
/// user has already confirmed. An already-removed target reports a
/// failed envelope and leaves state unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn wall_delete_photo(
    owner_kind: String,
    owner_id: String,
    photo_id: String,
) -> CatalogActionResponse {
    let Some(kind) = OwnerKind::parse(&owner_kind) else {
        return CatalogActionResponse::failure(format!("unknown owner kind `{owner_kind}`"));
    };

    with_catalog(|catalog| {
        if catalog.delete_photo(kind, &owner_id, &photo_id) {
            CatalogActionResponse::success("Photo deleted.", None)
        } else {
            CatalogActionResponse::failure("photo already gone")
        }
    })
    .unwrap_or_else(|err| CatalogActionResponse::failure(format!("wall_delete_photo failed: {err}")))
}

fn resolve_catalog_db_path() -> PathBuf {
    CATALOG_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("FORESTBOOK_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(CATALOG_DB_FILE_NAME)
        })
        .clone()
}

fn with_catalog<T>(
    f: impl FnOnce(&mut CatalogService<SqliteStateStore<'_>>) -> T,
) -> Result<T, String> {
    let db_path = resolve_catalog_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("catalog DB open failed: {err}"))?;
    let store = SqliteStateStore::try_new(&conn)
        .map_err(|err| format!("catalog store init failed: {err}"))?;
    let (mut catalog, _) = CatalogService::load(store);
    Ok(f(&mut catalog))
}

fn to_photo_view(photo: &PhotoItem) -> PhotoView {
    PhotoView {
        id: photo.id.clone(),
        uri: photo.uri.clone(),
        created_at_epoch_ms: photo.created_at,
    }
}

fn to_character_view(character: &Character) -> CharacterView {
    CharacterView {
        id: character.id.clone(),
        name: character.name.clone(),
        family: character.family.clone(),
        animal_type: character.animal_type.clone(),
        tags: character.tags.clone(),
        rating: character.rating,
        description: character.description.clone(),
        photos: character.photos.iter().map(to_photo_view).collect(),
    }
}

fn to_furniture_view(furniture: &Furniture) -> FurnitureView {
    FurnitureView {
        id: furniture.id.clone(),
        name: furniture.name.clone(),
        category: furniture.category.clone(),
        tags: furniture.tags.clone(),
        description: furniture.description.clone(),
        photos: furniture.photos.iter().map(to_photo_view).collect(),
    }
}
