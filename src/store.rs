// src/store.rs

//! Recipe store - the entry point for callers
//!
//! [`RecipeStore`] owns the database location and the slug source. Each
//! call opens its own connection, so a store can be shared between threads
//! (wrap it in an `Arc`) and SQLite's locking decides who waits: one writer
//! at a time, readers never blocked by it.
//!
//! Every mutation writes the recipe row and its search index entry in one
//! transaction. Either both are committed or neither is.

use crate::config::Config;
use crate::db::{self, models::StoredRecipe};
use crate::error::{Error, Result};
use crate::recipe::{Recipe, RecipeDraft};
use crate::search::{self, IndexReport, SearchIndex};
use crate::slug::{RandomSlugs, SlugSource};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fresh slugs tried before a create gives up
pub const MAX_SLUG_ATTEMPTS: u32 = 5;

pub struct RecipeStore {
    db_path: PathBuf,
    busy_timeout: Duration,
    search_limit: usize,
    slugs: Mutex<Box<dyn SlugSource>>,
}

impl RecipeStore {
    /// Open (and if needed create) the store described by `config`
    pub fn open(config: &Config) -> Result<Self> {
        db::init(&config.db_path)?;
        Ok(Self {
            db_path: config.db_path.clone(),
            busy_timeout: config.busy_timeout(),
            search_limit: config.search_limit,
            slugs: Mutex::new(Box::new(RandomSlugs::new())),
        })
    }

    /// Open a store at `db_path` with default settings
    pub fn open_path(db_path: impl AsRef<Path>) -> Result<Self> {
        let config = Config {
            db_path: db_path.as_ref().to_path_buf(),
            ..Config::default()
        };
        Self::open(&config)
    }

    /// Replace the slug source, e.g. with a seeded one for tests
    pub fn with_slug_source(mut self, source: impl SlugSource + 'static) -> Self {
        self.slugs = Mutex::new(Box::new(source));
        self
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Limit used by [`search_default`](Self::search_default)
    pub fn search_limit(&self) -> usize {
        self.search_limit
    }

    fn connect(&self) -> Result<Connection> {
        db::open_with_timeout(&self.db_path, self.busy_timeout)
    }

    fn next_slug(&self) -> String {
        self.slugs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_slug()
    }

    /// Persist a validated recipe and index it, returning the new id
    pub fn create_recipe(&self, recipe: &Recipe) -> Result<i64> {
        let mut conn = self.connect()?;
        let stored = db::transaction(&mut conn, |tx| {
            let stored = self.insert_with_fresh_slug(tx, recipe)?;
            SearchIndex::index_recipe(tx, &stored)?;
            Ok(stored)
        })?;

        info!("Saved recipe {} ({}) as {}", stored.id, stored.slug, recipe.title());
        Ok(stored.id)
    }

    /// Validate a draft, then [`create_recipe`](Self::create_recipe)
    pub fn create_from_draft(&self, draft: RecipeDraft) -> Result<i64> {
        let recipe = Recipe::try_from(draft)?;
        self.create_recipe(&recipe)
    }

    fn insert_with_fresh_slug(&self, conn: &Connection, recipe: &Recipe) -> Result<StoredRecipe> {
        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = self.next_slug();
            match StoredRecipe::insert(conn, recipe, &slug) {
                Ok(stored) => return Ok(stored),
                Err(e) if db::models::is_slug_conflict(&e) => {
                    warn!("Slug {} already taken (attempt {})", slug, attempt);
                }
                Err(e) => return Err(e),
            }
        }
        Err(Error::SlugExhausted {
            attempts: MAX_SLUG_ATTEMPTS,
        })
    }

    /// Look up a recipe by id
    pub fn get_recipe(&self, id: i64) -> Result<Option<StoredRecipe>> {
        let conn = self.connect()?;
        StoredRecipe::find_by_id(&conn, id)
    }

    /// Look up a recipe by its public slug
    pub fn get_recipe_by_slug(&self, slug: &str) -> Result<Option<StoredRecipe>> {
        let conn = self.connect()?;
        StoredRecipe::find_by_slug(&conn, slug)
    }

    /// Delete a recipe and its index entry; false if there was no such recipe
    pub fn delete_recipe(&self, id: i64) -> Result<bool> {
        let mut conn = self.connect()?;
        let existed = db::transaction(&mut conn, |tx| {
            let existed = StoredRecipe::delete(tx, id)?;
            let indexed = SearchIndex::remove(tx, id)?;
            if existed != indexed {
                warn!(
                    "Recipe {} row/index mismatch on delete (row: {}, index: {})",
                    id, existed, indexed
                );
            }
            Ok(existed)
        })?;

        if existed {
            info!("Deleted recipe {}", id);
        } else {
            debug!("Delete of unknown recipe {}", id);
        }
        Ok(existed)
    }

    /// Newest recipes first
    pub fn list_recent(&self, limit: usize) -> Result<Vec<StoredRecipe>> {
        let conn = self.connect()?;
        StoredRecipe::list_recent(&conn, limit)
    }

    /// Ranked full-text search, or newest recipes for a blank query
    pub fn search_recipes(&self, query: &str, limit: usize) -> Result<Vec<StoredRecipe>> {
        let mut conn = self.connect()?;
        db::read_transaction(&mut conn, |tx| search::search(tx, query, limit))
    }

    /// [`search_recipes`](Self::search_recipes) with the configured limit
    pub fn search_default(&self, query: &str) -> Result<Vec<StoredRecipe>> {
        self.search_recipes(query, self.search_limit)
    }

    /// Number of stored recipes
    pub fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        StoredRecipe::count(&conn)
    }

    /// Recreate the whole search index from the recipe rows
    pub fn reindex(&self) -> Result<usize> {
        let mut conn = self.connect()?;
        db::transaction(&mut conn, |tx| SearchIndex::rebuild(tx))
    }

    /// Report recipes without index entries and index entries without recipes
    pub fn check_index(&self) -> Result<IndexReport> {
        let mut conn = self.connect()?;
        db::read_transaction(&mut conn, |tx| SearchIndex::check(tx))
    }
}

impl std::fmt::Debug for RecipeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeStore")
            .field("db_path", &self.db_path)
            .field("busy_timeout", &self.busy_timeout)
            .field("search_limit", &self.search_limit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Hands out a fixed sequence, then repeats the last slug
    struct ScriptedSlugs(Vec<&'static str>);

    impl SlugSource for ScriptedSlugs {
        fn next_slug(&mut self) -> String {
            if self.0.len() > 1 {
                self.0.remove(0).to_string()
            } else {
                self.0[0].to_string()
            }
        }
    }

    fn open_store() -> (TempDir, RecipeStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RecipeStore::open_path(dir.path().join("recipes.db")).unwrap();
        (dir, store)
    }

    fn recipe(title: &str) -> Recipe {
        Recipe::try_from(RecipeDraft::new(title, 1, 1)).unwrap()
    }

    #[test]
    fn test_slug_collision_retries_with_fresh_slug() {
        let (_dir, store) = open_store();
        let store = store.with_slug_source(ScriptedSlugs(vec!["aaaaaaaa", "aaaaaaaa", "bbbbbbbb"]));

        let first = store.create_recipe(&recipe("Erstes")).unwrap();
        let second = store.create_recipe(&recipe("Zweites")).unwrap();

        assert_eq!(store.get_recipe(first).unwrap().unwrap().slug, "aaaaaaaa");
        assert_eq!(store.get_recipe(second).unwrap().unwrap().slug, "bbbbbbbb");
        assert!(store.check_index().unwrap().is_consistent());
    }

    #[test]
    fn test_slug_exhaustion_leaves_no_partial_state() {
        let (_dir, store) = open_store();
        let store = store.with_slug_source(ScriptedSlugs(vec!["samesame"]));

        store.create_recipe(&recipe("Erstes")).unwrap();
        let err = store.create_recipe(&recipe("Zweites")).unwrap_err();

        assert!(matches!(err, Error::SlugExhausted { attempts: MAX_SLUG_ATTEMPTS }));
        assert_eq!(store.count().unwrap(), 1);
        assert!(store.check_index().unwrap().is_consistent());
    }

    #[test]
    fn test_create_from_draft_rejects_invalid() {
        let (_dir, store) = open_store();
        let err = store.create_from_draft(RecipeDraft::new("Ei", 1, 1)).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_search_default_uses_configured_limit() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            db_path: dir.path().join("recipes.db"),
            busy_timeout_ms: 1000,
            search_limit: 2,
        };
        let store = RecipeStore::open(&config).unwrap();
        for title in ["Suppe eins", "Suppe zwei", "Suppe drei"] {
            store.create_recipe(&recipe(title)).unwrap();
        }

        assert_eq!(store.search_default("suppe").unwrap().len(), 2);
        assert_eq!(store.search_default("").unwrap().len(), 2);
    }
}
