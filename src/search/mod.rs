// src/search/mod.rs

//! Full-text search over saved recipes
//!
//! Queries use FTS5 match syntax against the `title`, `ingredients_text` and
//! `steps_text` columns, ranked by bm25. A blank query lists the newest
//! recipes instead. Syntax errors surface as `Error::Query`, separate from
//! an empty result.

mod index;
mod planner;

pub(crate) use index::SearchIndex;
pub use index::{IndexHit, IndexReport};
pub use planner::{QueryPlan, plan, search};
