// src/db/models/mod.rs

//! Data models for recipe store entities
//!
//! Structs that correspond to database tables, with methods for creating,
//! reading and deleting rows. They take a plain `&Connection` so callers can
//! pass either a connection or an open transaction.

mod recipe;

pub(crate) use recipe::sql_limit;
pub use recipe::{is_slug_conflict, StoredRecipe};
