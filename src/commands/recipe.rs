// src/commands/recipe.rs
//! Commands that create, show and delete single recipes

use super::open_store;
use anyhow::{Context, Result};
use rezepte::{Config, RecipeDraft, RecipeStore, StoredRecipe};
use std::path::{Path, PathBuf};
use tracing::info;

/// Save a recipe built from command-line flags
pub fn cmd_add(config: &Config, draft: RecipeDraft, db_path: Option<PathBuf>) -> Result<()> {
    let store = open_store(config, db_path)?;
    let id = store.create_from_draft(draft)?;
    report_saved(&store, id)
}

/// Save a recipe read from a JSON or TOML file
pub fn cmd_import(config: &Config, path: &Path, db_path: Option<PathBuf>) -> Result<()> {
    info!("Importing recipe from {}", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe file {}", path.display()))?;
    let draft = parse_draft(path, &content)?;

    let store = open_store(config, db_path)?;
    let id = store.create_from_draft(draft)?;
    report_saved(&store, id)
}

fn parse_draft(path: &Path, content: &str) -> Result<RecipeDraft> {
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let draft = if is_toml {
        toml::from_str(content).with_context(|| format!("Invalid TOML recipe {}", path.display()))?
    } else {
        serde_json::from_str(content)
            .with_context(|| format!("Invalid JSON recipe {}", path.display()))?
    };
    Ok(draft)
}

fn report_saved(store: &RecipeStore, id: i64) -> Result<()> {
    let stored = store
        .get_recipe(id)?
        .context("Saved recipe disappeared before it could be read back")?;
    println!("Saved recipe {} as [{}] /{}", stored.recipe.title(), stored.id, stored.slug);
    Ok(())
}

/// Show a recipe by numeric id or by slug
pub fn cmd_show(config: &Config, key: &str, json: bool, db_path: Option<PathBuf>) -> Result<()> {
    let store = open_store(config, db_path)?;
    let stored = find_recipe(&store, key)?.with_context(|| format!("Recipe not found: {}", key))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stored)?);
    } else {
        print_recipe(&stored);
    }
    Ok(())
}

/// Numeric keys are tried as ids first, then as slugs (`-1234567` is a valid slug)
fn find_recipe(store: &RecipeStore, key: &str) -> Result<Option<StoredRecipe>> {
    if let Ok(id) = key.parse::<i64>() {
        if let Some(stored) = store.get_recipe(id)? {
            return Ok(Some(stored));
        }
    }
    Ok(store.get_recipe_by_slug(key)?)
}

fn print_recipe(stored: &StoredRecipe) {
    let recipe = &stored.recipe;
    println!("{}", recipe.title());
    println!("  Id: {}  Slug: {}", stored.id, stored.slug);
    println!(
        "  Servings: {}  Time: {} min  Difficulty: {}  Ingredients: {}",
        recipe.servings(),
        recipe.time_minutes(),
        recipe.difficulty(),
        recipe.ingredient_load()
    );
    if !recipe.tags().is_empty() {
        println!("  Tags: {}", recipe.tags().join(", "));
    }
    println!("  Saved: {}", stored.created_at.format("%Y-%m-%d %H:%M UTC"));

    if !recipe.ingredients().is_empty() {
        println!("\nIngredients:");
        for ingredient in recipe.ingredients() {
            println!("  - {}", ingredient);
        }
    }
    if !recipe.steps().is_empty() {
        println!("\nSteps:");
        for (n, step) in recipe.steps().iter().enumerate() {
            println!("  {}. {}", n + 1, step);
        }
    }
}

/// Delete a recipe by id
pub fn cmd_delete(config: &Config, id: i64, db_path: Option<PathBuf>) -> Result<()> {
    let store = open_store(config, db_path)?;
    if store.delete_recipe(id)? {
        println!("Deleted recipe {}", id);
    } else {
        println!("No recipe with id {}", id);
    }
    Ok(())
}
