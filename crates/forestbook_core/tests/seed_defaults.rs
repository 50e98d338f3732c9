use forestbook_core::db::open_db_in_memory;
use forestbook_core::{
    default_catalog_state, CatalogService, LoadSource, PhotoItem, SqliteStateStore, StateStore,
    STATE_KEY,
};
use rusqlite::params;

#[test]
fn absent_state_installs_seed_collections() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();

    let (catalog, source) = CatalogService::load(store);
    assert_eq!(source, LoadSource::DefaultsFresh);
    assert_eq!(catalog.state(), &default_catalog_state());
}

#[test]
fn corrupt_state_installs_seed_collections_and_reports_the_error() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO app_state (key, value) VALUES (?1, ?2);",
        params![STATE_KEY, "{not json"],
    )
    .unwrap();

    let store = SqliteStateStore::try_new(&conn).unwrap();
    let (catalog, source) = CatalogService::load(store);

    match source {
        LoadSource::DefaultsAfterError(message) => {
            assert!(message.contains("corrupt persisted state"));
        }
        other => panic!("expected DefaultsAfterError, got {other:?}"),
    }
    assert_eq!(catalog.state(), &default_catalog_state());
}

#[test]
fn defaulting_is_idempotent_across_reloads() {
    let conn = open_db_in_memory().unwrap();

    // First load seeds but never writes on its own.
    {
        let store = SqliteStateStore::try_new(&conn).unwrap();
        let (_, source) = CatalogService::load(store);
        assert_eq!(source, LoadSource::DefaultsFresh);
    }

    let store = SqliteStateStore::try_new(&conn).unwrap();
    let (catalog, source) = CatalogService::load(store);
    assert_eq!(source, LoadSource::DefaultsFresh);
    assert_eq!(catalog.state(), &default_catalog_state());
}

#[test]
fn persisted_state_wins_over_seeds() {
    let conn = open_db_in_memory().unwrap();

    {
        let store = SqliteStateStore::try_new(&conn).unwrap();
        let (mut catalog, _) = CatalogService::load(store);
        let owner_id = catalog.characters()[0].id.clone();
        catalog.add_character_photo(&owner_id, PhotoItem::with_created_at("file:///kept.jpg", 1));
    }

    let store = SqliteStateStore::try_new(&conn).unwrap();
    let expected = store.load().unwrap().unwrap();
    let (catalog, source) = CatalogService::load(store);

    assert_eq!(source, LoadSource::Persisted);
    assert_eq!(catalog.state(), &expected);
    assert_eq!(catalog.characters()[0].photos.len(), 1);
}
