// src/search/planner.rs

//! Query planning: ranked full-text match or plain recency listing

use super::index::SearchIndex;
use crate::db::models::StoredRecipe;
use crate::error::Result;
use rusqlite::Connection;
use tracing::{debug, warn};

/// How a search request will be answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPlan<'q> {
    /// Blank query: newest recipes first, no ranking
    Recent,
    /// FTS5 match expression over title, ingredients and steps
    FullText(&'q str),
}

/// Decide how to answer `query`
pub fn plan(query: &str) -> QueryPlan<'_> {
    let query = query.trim();
    if query.is_empty() {
        QueryPlan::Recent
    } else {
        QueryPlan::FullText(query)
    }
}

/// Answer a search request with at most `limit` recipes
///
/// Run this inside a read transaction so the index hits and the rows they
/// are resolved against come from the same snapshot.
pub fn search(conn: &Connection, query: &str, limit: usize) -> Result<Vec<StoredRecipe>> {
    let plan = plan(query);
    debug!("Search plan for {:?}: {:?}", query, plan);

    match plan {
        QueryPlan::Recent => StoredRecipe::list_recent(conn, limit),
        QueryPlan::FullText(expr) => {
            let hits = SearchIndex::query(conn, expr, limit)?;
            let mut recipes = Vec::with_capacity(hits.len());
            for hit in hits {
                match StoredRecipe::find_by_id(conn, hit.id)? {
                    Some(recipe) => recipes.push(recipe),
                    None => warn!("Search index entry {} has no recipe row", hit.id),
                }
            }
            Ok(recipes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_blank_is_recent() {
        assert_eq!(plan(""), QueryPlan::Recent);
        assert_eq!(plan("   \t\n"), QueryPlan::Recent);
    }

    #[test]
    fn test_plan_trims_fulltext() {
        assert_eq!(plan("  Knoblauch "), QueryPlan::FullText("Knoblauch"));
        assert_eq!(
            plan("title:suppe OR linsen"),
            QueryPlan::FullText("title:suppe OR linsen")
        );
    }
}
