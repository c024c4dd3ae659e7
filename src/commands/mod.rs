// src/commands/mod.rs
//! Command handlers for the rezepte CLI

mod recipe;
mod search;
mod system;

pub use recipe::{cmd_add, cmd_delete, cmd_import, cmd_show};
pub use search::{cmd_list, cmd_search};
pub use system::{cmd_check, cmd_init, cmd_reindex};

use anyhow::Result;
use rezepte::{Config, RecipeStore, StoredRecipe};
use std::path::PathBuf;

/// Open the store, letting an explicit `--db-path` win over the config
fn open_store(config: &Config, db_path: Option<PathBuf>) -> Result<RecipeStore> {
    let mut config = config.clone();
    if let Some(db_path) = db_path {
        config.db_path = db_path;
    }
    Ok(RecipeStore::open(&config)?)
}

/// One-line summary used by list and search output
fn print_summary(stored: &StoredRecipe) {
    let recipe = &stored.recipe;
    print!(
        "  [{}] {} ({} min, {}, {} servings)",
        stored.id,
        recipe.title(),
        recipe.time_minutes(),
        recipe.difficulty(),
        recipe.servings()
    );
    if !recipe.tags().is_empty() {
        print!(" #{}", recipe.tags().join(" #"));
    }
    println!("  /{}", stored.slug);
}

fn print_summaries(recipes: &[StoredRecipe], empty_message: &str) {
    if recipes.is_empty() {
        println!("{}", empty_message);
        return;
    }
    for stored in recipes {
        print_summary(stored);
    }
    println!("\nTotal: {} recipe(s)", recipes.len());
}
