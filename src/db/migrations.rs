// src/db/migrations.rs
//! Database migration implementations
//!
//! Each function brings the schema from version `n - 1` to `n`. They run
//! inside the transaction opened by `db::init`.

use crate::error::Result;
use rusqlite::Connection;
use tracing::{debug, info};

/// Initial schema - Version 1
///
/// - recipes: canonical rows; `data` holds the full JSON snapshot used to
///   rebuild a `Recipe`, the other columns are derived from it at write time
/// - recipes_fts: full-text index keyed by recipe id (rowid)
///
/// The index is kept in sync by the store's write path, not by triggers.
pub fn migrate_v1(conn: &Connection) -> Result<()> {
    debug!("Creating schema version 1");

    conn.execute_batch(
        "
        -- AUTOINCREMENT so ids of deleted recipes are never handed out again
        CREATE TABLE recipes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            slug TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            servings INTEGER NOT NULL,
            time_minutes INTEGER NOT NULL,
            difficulty INTEGER NOT NULL,
            ingredient_load INTEGER NOT NULL,
            tags TEXT NOT NULL,
            data TEXT NOT NULL,
            ingredients_text TEXT NOT NULL,
            steps_text TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX idx_recipes_created_at ON recipes(created_at);

        CREATE VIRTUAL TABLE recipes_fts USING fts5(
            title,
            ingredients_text,
            steps_text
        );
        ",
    )?;

    info!("Schema version 1 created successfully");
    Ok(())
}
