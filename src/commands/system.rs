// src/commands/system.rs
//! Database maintenance commands: init, reindex, check

use super::open_store;
use anyhow::Result;
use rezepte::Config;
use std::path::PathBuf;

/// Create the database and schema
pub fn cmd_init(config: &Config, db_path: Option<PathBuf>) -> Result<()> {
    let store = open_store(config, db_path)?;
    println!("Database initialized at: {}", store.db_path().display());
    println!("Recipes: {}", store.count()?);
    Ok(())
}

/// Recreate the search index from the recipe rows
pub fn cmd_reindex(config: &Config, db_path: Option<PathBuf>) -> Result<()> {
    let store = open_store(config, db_path)?;
    let indexed = store.reindex()?;
    println!("Reindexed {} recipe(s)", indexed);
    Ok(())
}

/// Compare recipe rows against search index entries
pub fn cmd_check(config: &Config, db_path: Option<PathBuf>) -> Result<()> {
    let store = open_store(config, db_path)?;
    let report = store.check_index()?;

    if report.is_consistent() {
        println!("[OK] Search index matches {} recipe(s)", store.count()?);
        return Ok(());
    }

    if !report.missing.is_empty() {
        println!("[FAIL] Recipes without index entry: {:?}", report.missing);
    }
    if !report.orphaned.is_empty() {
        println!("[FAIL] Index entries without recipe: {:?}", report.orphaned);
    }
    anyhow::bail!("Search index is out of sync; run `rezepte reindex`")
}
