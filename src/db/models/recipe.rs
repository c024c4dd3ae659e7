// src/db/models/recipe.rs

//! Recipe row model - canonical storage for saved recipes

use crate::error::{Error, Result};
use crate::recipe::Recipe;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::Serialize;

const COLUMNS: &str = "id, slug, data, created_at";

/// A recipe as persisted, with the identifiers the store assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredRecipe {
    pub id: i64,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub recipe: Recipe,
}

impl StoredRecipe {
    /// Insert a recipe row under the given slug
    ///
    /// Writes only the `recipes` table; keeping the search index in step is
    /// the caller's job, inside the same transaction.
    pub fn insert(conn: &Connection, recipe: &Recipe, slug: &str) -> Result<Self> {
        // Stored at microsecond precision; keep the returned value identical
        let created_at = Utc::now().trunc_subsecs(6);
        let data = serde_json::to_string(recipe)?;

        conn.execute(
            "INSERT INTO recipes
                (slug, title, servings, time_minutes, difficulty, ingredient_load,
                 tags, data, ingredients_text, steps_text, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                slug,
                recipe.title(),
                recipe.servings(),
                recipe.time_minutes(),
                i64::from(recipe.difficulty()),
                i64::from(recipe.ingredient_load()),
                recipe.tags_text(),
                data,
                recipe.ingredients_text(),
                recipe.steps_text(),
                format_timestamp(&created_at),
            ],
        )?;

        Ok(Self {
            id: conn.last_insert_rowid(),
            slug: slug.to_string(),
            created_at,
            recipe: recipe.clone(),
        })
    }

    /// Find a recipe by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM recipes WHERE id = ?1"))?;
        let recipe = stmt.query_row([id], Self::from_row).optional()?;
        Ok(recipe)
    }

    /// Find a recipe by its public slug
    pub fn find_by_slug(conn: &Connection, slug: &str) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM recipes WHERE slug = ?1"))?;
        let recipe = stmt.query_row([slug], Self::from_row).optional()?;
        Ok(recipe)
    }

    /// Most recently created recipes first
    pub fn list_recent(conn: &Connection, limit: usize) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM recipes ORDER BY created_at DESC, id DESC LIMIT ?1"
        ))?;

        let recipes = stmt
            .query_map([sql_limit(limit)], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Number of stored recipes
    pub fn count(conn: &Connection) -> Result<usize> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete a recipe row by ID, returning whether it existed
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let removed = conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
        Ok(removed > 0)
    }

    /// Convert a database row to a StoredRecipe
    ///
    /// The recipe itself comes from the JSON snapshot, which preserves list
    /// order exactly.
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let data: String = row.get(2)?;
        let recipe: Recipe = serde_json::from_str(&data)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

        let created_at: String = row.get(3)?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?
            .with_timezone(&Utc);

        Ok(Self {
            id: row.get(0)?,
            slug: row.get(1)?,
            created_at,
            recipe,
        })
    }
}

/// Fixed-width UTC timestamps sort lexically in time order
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

/// Whether an insert failed only because the slug was already taken
pub fn is_slug_conflict(err: &Error) -> bool {
    match err {
        Error::Database(rusqlite::Error::SqliteFailure(e, Some(msg))) => {
            e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                && msg.contains("recipes.slug")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;
    use crate::recipe::RecipeDraft;
    use tempfile::NamedTempFile;

    fn create_test_db() -> (NamedTempFile, Connection) {
        let temp_file = NamedTempFile::new().unwrap();
        let conn = Connection::open(temp_file.path()).unwrap();
        schema::migrate(&conn).unwrap();
        (temp_file, conn)
    }

    fn recipe(title: &str) -> Recipe {
        let mut draft = RecipeDraft::new(title, 2, 2);
        draft.tags = vec!["abendessen".into(), "schnell".into()];
        draft.ingredients = vec!["Nudeln".into(), "Knoblauch".into(), "Olivenöl".into()];
        draft.steps = vec!["Nudeln kochen".into(), "Knoblauch anschwitzen".into()];
        Recipe::try_from(draft).unwrap()
    }

    #[test]
    fn test_recipe_crud() {
        let (_temp, conn) = create_test_db();

        let stored = StoredRecipe::insert(&conn, &recipe("Aglio e Olio"), "slug0001").unwrap();
        assert!(stored.id > 0);

        let found = StoredRecipe::find_by_id(&conn, stored.id).unwrap().unwrap();
        assert_eq!(found, stored);
        assert_eq!(found.recipe.ingredients(), ["Nudeln", "Knoblauch", "Olivenöl"]);

        let by_slug = StoredRecipe::find_by_slug(&conn, "slug0001").unwrap().unwrap();
        assert_eq!(by_slug.id, stored.id);

        assert!(StoredRecipe::delete(&conn, stored.id).unwrap());
        assert!(!StoredRecipe::delete(&conn, stored.id).unwrap());
        assert!(StoredRecipe::find_by_id(&conn, stored.id).unwrap().is_none());
    }

    #[test]
    fn test_created_at_round_trips_exactly() {
        let (_temp, conn) = create_test_db();
        let stored = StoredRecipe::insert(&conn, &recipe("Aglio e Olio"), "slug0001").unwrap();
        assert_eq!(stored.created_at.timestamp_subsec_nanos() % 1000, 0);

        let found = StoredRecipe::find_by_id(&conn, stored.id).unwrap().unwrap();
        assert_eq!(found.created_at, stored.created_at);
        assert_eq!(format_timestamp(&found.created_at), format_timestamp(&stored.created_at));
    }

    #[test]
    fn test_derived_columns_written() {
        let (_temp, conn) = create_test_db();
        let stored = StoredRecipe::insert(&conn, &recipe("Aglio e Olio"), "slug0001").unwrap();

        let (tags, ingredients, steps): (String, String, String) = conn
            .query_row(
                "SELECT tags, ingredients_text, steps_text FROM recipes WHERE id = ?1",
                [stored.id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!(tags, "abendessen,schnell");
        assert_eq!(ingredients, "Nudeln\nKnoblauch\nOlivenöl");
        assert_eq!(steps, "Nudeln kochen\nKnoblauch anschwitzen");
    }

    #[test]
    fn test_duplicate_slug_is_detected() {
        let (_temp, conn) = create_test_db();
        StoredRecipe::insert(&conn, &recipe("Erstes Rezept"), "samesame").unwrap();

        let err = StoredRecipe::insert(&conn, &recipe("Zweites Rezept"), "samesame").unwrap_err();
        assert!(is_slug_conflict(&err));
        assert_eq!(StoredRecipe::count(&conn).unwrap(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let (_temp, conn) = create_test_db();
        let first = StoredRecipe::insert(&conn, &recipe("Erstes Rezept"), "slug0001").unwrap();
        StoredRecipe::delete(&conn, first.id).unwrap();

        let second = StoredRecipe::insert(&conn, &recipe("Zweites Rezept"), "slug0002").unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_list_recent_newest_first() {
        let (_temp, conn) = create_test_db();
        let ids: Vec<i64> = ["Suppe", "Salat", "Kuchen"]
            .iter()
            .enumerate()
            .map(|(i, title)| {
                StoredRecipe::insert(&conn, &recipe(title), &format!("slug000{i}"))
                    .unwrap()
                    .id
            })
            .collect();

        let recent = StoredRecipe::list_recent(&conn, 2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, ids[2]);
        assert_eq!(recent[1].id, ids[1]);
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let (_temp, conn) = create_test_db();
        let stored = StoredRecipe::insert(&conn, &recipe("Aglio e Olio"), "slug0001").unwrap();
        conn.execute("UPDATE recipes SET data = '{}' WHERE id = ?1", [stored.id])
            .unwrap();

        assert!(StoredRecipe::find_by_id(&conn, stored.id).is_err());
    }
}
