// src/commands/search.rs
//! Search and listing commands

use super::{open_store, print_summaries};
use anyhow::Result;
use rezepte::{Config, Error};
use std::path::PathBuf;
use tracing::info;

/// Search saved recipes; a blank query lists the newest
pub fn cmd_search(
    config: &Config,
    query: Option<&str>,
    limit: Option<usize>,
    db_path: Option<PathBuf>,
) -> Result<()> {
    let store = open_store(config, db_path)?;
    let query = query.unwrap_or_default();
    let limit = limit.unwrap_or(store.search_limit());
    info!("Searching for {:?} (limit {})", query, limit);

    match store.search_recipes(query, limit) {
        Ok(recipes) => {
            print_summaries(&recipes, "No matching recipes.");
            Ok(())
        }
        Err(Error::Query(reason)) => Err(anyhow::anyhow!(
            "Invalid search query {:?}: {}. Check for unmatched quotes or stray operators.",
            query,
            reason
        )),
        Err(e) => Err(e.into()),
    }
}

/// List the newest recipes
pub fn cmd_list(config: &Config, limit: Option<usize>, db_path: Option<PathBuf>) -> Result<()> {
    let store = open_store(config, db_path)?;
    let limit = limit.unwrap_or(store.search_limit());
    let recipes = store.list_recent(limit)?;
    print_summaries(&recipes, "No saved recipes.");
    Ok(())
}
