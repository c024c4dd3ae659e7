// src/search/index.rs

//! Full-text index over recipe text
//!
//! One `recipes_fts` row per recipe, keyed by rowid = recipe id. Only the
//! store's write path touches it, always in the same transaction as the
//! matching `recipes` row.

use crate::db::models::StoredRecipe;
use crate::error::{Error, Result};
use rusqlite::{Connection, ErrorCode, params};
use tracing::{debug, info, warn};

/// A matched recipe id and its bm25 score (lower is a better match)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexHit {
    pub id: i64,
    pub score: f64,
}

/// Differences between the recipe rows and the index entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexReport {
    /// Recipes with no index entry
    pub missing: Vec<i64>,
    /// Index entries with no recipe
    pub orphaned: Vec<i64>,
}

impl IndexReport {
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty() && self.orphaned.is_empty()
    }
}

pub(crate) struct SearchIndex;

impl SearchIndex {
    /// Insert or fully replace the entry for `id`
    pub fn index(
        conn: &Connection,
        id: i64,
        title: &str,
        ingredients_text: &str,
        steps_text: &str,
    ) -> Result<()> {
        conn.execute("DELETE FROM recipes_fts WHERE rowid = ?1", [id])?;
        conn.execute(
            "INSERT INTO recipes_fts (rowid, title, ingredients_text, steps_text)
             VALUES (?1, ?2, ?3, ?4)",
            params![id, title, ingredients_text, steps_text],
        )?;
        debug!("Indexed recipe {}", id);
        Ok(())
    }

    /// Index the derived text of a stored recipe under its id
    pub fn index_recipe(conn: &Connection, stored: &StoredRecipe) -> Result<()> {
        Self::index(
            conn,
            stored.id,
            stored.recipe.title(),
            &stored.recipe.ingredients_text(),
            &stored.recipe.steps_text(),
        )
    }

    /// Delete the entry for `id`, returning whether one existed
    pub fn remove(conn: &Connection, id: i64) -> Result<bool> {
        let removed = conn.execute("DELETE FROM recipes_fts WHERE rowid = ?1", [id])?;
        Ok(removed > 0)
    }

    /// Run an FTS5 match expression, best matches first
    ///
    /// Ties on score fall back to ascending id so the order is stable.
    pub fn query(conn: &Connection, expr: &str, limit: usize) -> Result<Vec<IndexHit>> {
        let mut stmt = conn.prepare(
            "SELECT rowid, bm25(recipes_fts) AS score
             FROM recipes_fts
             WHERE recipes_fts MATCH ?1
             ORDER BY score, rowid
             LIMIT ?2",
        )?;

        let limit = crate::db::models::sql_limit(limit);
        stmt.query_map(params![expr, limit], |row| {
            Ok(IndexHit {
                id: row.get(0)?,
                score: row.get(1)?,
            })
        })
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .map_err(|e| match_error(expr, e))
    }

    /// Recreate every entry from the canonical rows
    pub fn rebuild(conn: &Connection) -> Result<usize> {
        conn.execute("DELETE FROM recipes_fts", [])?;
        let indexed = conn.execute(
            "INSERT INTO recipes_fts (rowid, title, ingredients_text, steps_text)
             SELECT id, title, ingredients_text, steps_text FROM recipes",
            [],
        )?;
        info!("Rebuilt search index with {} entries", indexed);
        Ok(indexed)
    }

    /// Compare recipe ids against index rowids
    pub fn check(conn: &Connection) -> Result<IndexReport> {
        let missing = ids(
            conn,
            "SELECT id FROM recipes WHERE id NOT IN (SELECT rowid FROM recipes_fts) ORDER BY id",
        )?;
        let orphaned = ids(
            conn,
            "SELECT rowid FROM recipes_fts WHERE rowid NOT IN (SELECT id FROM recipes) ORDER BY rowid",
        )?;
        Ok(IndexReport { missing, orphaned })
    }
}

fn ids(conn: &Connection, sql: &str) -> Result<Vec<i64>> {
    let mut stmt = conn.prepare(sql)?;
    let ids = stmt
        .query_map([], |row| row.get(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(ids)
}

/// FTS5 reports bad match syntax as a generic SQLITE_ERROR
fn match_error(expr: &str, err: rusqlite::Error) -> Error {
    match &err {
        rusqlite::Error::SqliteFailure(e, msg) if e.code == ErrorCode::Unknown => {
            let reason = msg.clone().unwrap_or_else(|| e.to_string());
            warn!("Rejected search query {:?}: {}", expr, reason);
            Error::Query(reason)
        }
        _ => Error::Database(err),
    }
}
