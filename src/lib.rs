// src/lib.rs

//! Rezepte recipe store
//!
//! Saves recipes to SQLite and finds them again by full-text query.
//!
//! # Architecture
//!
//! - Validate on construct: a `Recipe` only exists once its fields pass
//!   validation, and list fields are already trimmed
//! - Canonical rows: each recipe is stored as structured columns plus a JSON
//!   snapshot that rebuilds it losslessly
//! - Synchronous index: an FTS5 entry per recipe, written and removed in the
//!   same transaction as the row
//! - Query planning: blank queries list the newest recipes, anything else is
//!   a bm25-ranked match
//! - Opaque slugs: random URL-safe handles, never derived from the title

pub mod config;
pub mod db;
mod error;
pub mod recipe;
pub mod search;
pub mod slug;
mod store;

pub use config::Config;
pub use db::models::StoredRecipe;
pub use error::{Error, ErrorKind, Result};
pub use recipe::{Difficulty, IngredientLoad, Recipe, RecipeDraft, ValidationError, Violation};
pub use search::{IndexReport, QueryPlan};
pub use slug::{RandomSlugs, SlugSource};
pub use store::{RecipeStore, MAX_SLUG_ATTEMPTS};
