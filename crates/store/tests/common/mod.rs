//! Test infrastructure for the climb store.

pub mod fixtures;

pub use fixtures::*;

use crimp_store::SqliteStore;

/// Creates an empty in-memory store with the schema initialized.
pub fn create_store() -> SqliteStore {
    let store = SqliteStore::in_memory().expect("Failed to create store");
    store.init_schema().expect("Failed to initialize schema");
    store
}

/// Creates an in-memory store seeded with the standard test board.
pub fn create_seeded_store() -> SqliteStore {
    let store = create_store();
    seed_board(&store);
    store
}
