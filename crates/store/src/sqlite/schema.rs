//! SQLite schema definitions.
//!
//! The table subset of a synced board database that the store reads:
//! layout/hole/placement geometry, climbs with their per-angle statistics,
//! panel sizes, hold sets, grade labels, role colors, and beta links.
//! Bootstrap is idempotent; production databases arrive pre-populated from
//! a board sync and already carry this shape.

use rusqlite::Connection;

use crate::error::{BackendError, StoreError, StoreResult};

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS layouts (
    id INTEGER PRIMARY KEY,
    product_id INTEGER NOT NULL REFERENCES products (id),
    name TEXT NOT NULL,
    is_mirrored INTEGER NOT NULL DEFAULT 0,
    is_listed INTEGER NOT NULL DEFAULT 1,
    password TEXT
);

CREATE TABLE IF NOT EXISTS holes (
    id INTEGER PRIMARY KEY,
    x INTEGER NOT NULL,
    y INTEGER NOT NULL,
    mirrored_hole_id INTEGER REFERENCES holes (id)
);

CREATE TABLE IF NOT EXISTS sets (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS placements (
    id INTEGER PRIMARY KEY,
    layout_id INTEGER NOT NULL REFERENCES layouts (id),
    hole_id INTEGER NOT NULL REFERENCES holes (id),
    set_id INTEGER NOT NULL REFERENCES sets (id)
);

CREATE TABLE IF NOT EXISTS placement_roles (
    id INTEGER PRIMARY KEY,
    product_id INTEGER NOT NULL REFERENCES products (id),
    screen_color TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS products_angles (
    product_id INTEGER NOT NULL REFERENCES products (id),
    angle INTEGER NOT NULL,
    PRIMARY KEY (product_id, angle)
);

CREATE TABLE IF NOT EXISTS product_sizes (
    id INTEGER PRIMARY KEY,
    product_id INTEGER NOT NULL REFERENCES products (id),
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    edge_left INTEGER NOT NULL,
    edge_right INTEGER NOT NULL,
    edge_bottom INTEGER NOT NULL,
    edge_top INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS product_sizes_layouts_sets (
    product_size_id INTEGER NOT NULL REFERENCES product_sizes (id),
    layout_id INTEGER NOT NULL REFERENCES layouts (id),
    set_id INTEGER NOT NULL REFERENCES sets (id),
    image_filename TEXT,
    PRIMARY KEY (product_size_id, layout_id, set_id)
);

CREATE TABLE IF NOT EXISTS climbs (
    uuid TEXT PRIMARY KEY,
    layout_id INTEGER NOT NULL REFERENCES layouts (id),
    setter_username TEXT NOT NULL,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    frames TEXT NOT NULL,
    frames_count INTEGER NOT NULL DEFAULT 1,
    is_draft INTEGER NOT NULL DEFAULT 0,
    is_listed INTEGER NOT NULL DEFAULT 1,
    edge_left INTEGER,
    edge_right INTEGER,
    edge_bottom INTEGER,
    edge_top INTEGER
);

CREATE TABLE IF NOT EXISTS climb_stats (
    climb_uuid TEXT NOT NULL REFERENCES climbs (uuid),
    angle INTEGER NOT NULL,
    display_difficulty REAL NOT NULL,
    difficulty_average REAL NOT NULL,
    ascensionist_count INTEGER NOT NULL,
    quality_average REAL NOT NULL,
    PRIMARY KEY (climb_uuid, angle)
);

CREATE TABLE IF NOT EXISTS difficulty_grades (
    difficulty INTEGER PRIMARY KEY,
    boulder_name TEXT NOT NULL,
    is_listed INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS beta_links (
    climb_uuid TEXT NOT NULL REFERENCES climbs (uuid),
    link TEXT NOT NULL,
    foreign_username TEXT,
    angle INTEGER,
    is_listed INTEGER NOT NULL DEFAULT 1,
    PRIMARY KEY (climb_uuid, link)
);

CREATE INDEX IF NOT EXISTS idx_climbs_layout ON climbs (layout_id);
CREATE INDEX IF NOT EXISTS idx_placements_layout_set ON placements (layout_id, set_id);
";

/// Initialize the database schema. Idempotent.
pub fn initialize_schema(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(SCHEMA_SQL).map_err(|e| {
        StoreError::Backend(BackendError::SchemaError {
            message: e.to_string(),
        })
    })
}
