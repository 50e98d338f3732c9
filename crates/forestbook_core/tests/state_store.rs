use forestbook_core::db::migrations::latest_version;
use forestbook_core::db::open_db_in_memory;
use forestbook_core::{
    default_catalog_state, PhotoItem, SqliteStateStore, StateStore, StoreError, STATE_KEY,
};
use rusqlite::{params, Connection};

#[test]
fn load_on_empty_database_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();
    assert!(store.load().unwrap().is_none());
}

#[test]
fn save_then_load_roundtrips_the_whole_state() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();

    let mut state = default_catalog_state();
    state.characters[0]
        .photos
        .push(PhotoItem::with_created_at("file:///roundtrip.jpg", 123));
    store.save(&state).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, state);
}

#[test]
fn save_replaces_the_previous_payload_under_one_key() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();

    store.save(&default_catalog_state()).unwrap();
    let mut updated = default_catalog_state();
    updated.furnitures.clear();
    store.save(&updated).unwrap();

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM app_state;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);

    let loaded = store.load().unwrap().unwrap();
    assert!(loaded.furnitures.is_empty());
}

#[test]
fn corrupt_payload_is_a_typed_error() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO app_state (key, value) VALUES (?1, ?2);",
        params![STATE_KEY, "[]"],
    )
    .unwrap();

    let store = SqliteStateStore::try_new(&conn).unwrap();
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt(_)));
}

#[test]
fn store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteStateStore::try_new(&conn) {
        Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn store_rejects_connection_without_app_state_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteStateStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredTable("app_state"))
    ));
}

#[test]
fn store_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE app_state (key TEXT PRIMARY KEY NOT NULL, value TEXT);")
        .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteStateStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredColumn {
            table: "app_state",
            column: "updated_at"
        })
    ));
}
