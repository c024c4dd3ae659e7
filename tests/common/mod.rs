// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use rezepte::{RandomSlugs, RecipeDraft, RecipeStore};
use tempfile::TempDir;

/// Create a store in a fresh temporary directory with reproducible slugs.
///
/// Returns (TempDir, store) - keep the TempDir alive to prevent cleanup.
pub fn setup_store() -> (TempDir, RecipeStore) {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = RecipeStore::open_path(temp_dir.path().join("recipes.db"))
        .unwrap()
        .with_slug_source(RandomSlugs::seeded(42));
    (temp_dir, store)
}

/// A valid draft with the given title, ingredients and steps
pub fn draft(title: &str, ingredients: &[&str], steps: &[&str]) -> RecipeDraft {
    let mut draft = RecipeDraft::new(title, 1, 2);
    draft.ingredients = ingredients.iter().map(|s| s.to_string()).collect();
    draft.steps = steps.iter().map(|s| s.to_string()).collect();
    draft
}

/// Store three recipes, two of which mention garlic.
///
/// Returns the ids in insertion order.
pub fn seed_recipes(store: &RecipeStore) -> Vec<i64> {
    let mut knoblauchsuppe = draft(
        "Knoblauchsuppe",
        &["2 Knollen Knoblauch", "1 l Gemüsebrühe", "200 ml Sahne"],
        &["Knoblauch schälen und anrösten", "Mit Brühe aufgießen", "Sahne einrühren"],
    );
    knoblauchsuppe.tags = vec!["suppe".into(), "vegetarisch".into()];

    let gulasch = draft(
        "Rindergulasch",
        &["1 kg Rindfleisch", "500 g Zwiebeln", "1 Zehe Knoblauch"],
        &["Zwiebeln schmoren", "Fleisch zugeben", "Drei Stunden köcheln"],
    );

    let pfannkuchen = draft(
        "Pfannkuchen",
        &["250 g Mehl", "3 Eier", "500 ml Milch"],
        &["Teig rühren", "In der Pfanne ausbacken"],
    );

    [knoblauchsuppe, gulasch, pfannkuchen]
        .into_iter()
        .map(|d| store.create_from_draft(d).unwrap())
        .collect()
}
