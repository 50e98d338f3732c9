//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `forestbook_core` linkage.
//! - Walk the seed -> capture -> wall -> confirmed-delete path once
//!   against an in-memory database.

use forestbook_core::db::open_db_in_memory;
use forestbook_core::{
    build_photo_wall, CatalogService, DeleteFlow, PhotoItem, SqliteStateStore, WallMode,
};
use std::error::Error;

fn main() {
    println!("forestbook_core ping={}", forestbook_core::ping());
    println!("forestbook_core version={}", forestbook_core::core_version());

    if let Err(err) = smoke() {
        eprintln!("smoke failed: {err}");
        std::process::exit(1);
    }
}

fn smoke() -> Result<(), Box<dyn Error>> {
    let conn = open_db_in_memory()?;
    let store = SqliteStateStore::try_new(&conn)?;
    let (mut catalog, _) = CatalogService::load(store);
    println!(
        "seeded characters={} furnitures={}",
        catalog.characters().len(),
        catalog.furnitures().len()
    );

    let owner_id = match catalog.characters().first() {
        Some(character) => character.id.clone(),
        None => return Err("seed collections are empty".into()),
    };
    catalog.add_character_photo(&owner_id, PhotoItem::new("file:///smoke.jpg"));

    let wall = build_photo_wall(WallMode::Characters, catalog.state());
    println!("wall entries={}", wall.len());

    let mut flow = DeleteFlow::new();
    if let Some(entry) = wall.into_iter().next() {
        flow.select(entry);
        let owner_name = flow.request_delete()?.to_string();
        let removed = flow.confirm(&mut catalog)?;
        println!("deleted from owner={owner_name} removed={removed}");
    }

    println!(
        "wall entries after delete={}",
        build_photo_wall(WallMode::Characters, catalog.state()).len()
    );
    Ok(())
}
