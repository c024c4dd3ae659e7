// src/recipe/draft.rs

//! Unvalidated recipe input

use serde::{Deserialize, Serialize};

fn default_servings() -> i64 {
    2
}

fn default_time_minutes() -> i64 {
    30
}

/// Raw recipe fields as supplied by a caller
///
/// Numbers are kept as plain integers so that out-of-range input can be
/// reported instead of failing to parse. Validate with `Recipe::try_from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    #[serde(default = "default_servings")]
    pub servings: i64,
    #[serde(default = "default_time_minutes")]
    pub time_minutes: i64,
    pub difficulty: i64,
    pub ingredient_load: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl RecipeDraft {
    /// Create a draft with default servings (2) and time (30 minutes)
    pub fn new(title: impl Into<String>, difficulty: i64, ingredient_load: i64) -> Self {
        Self {
            title: title.into(),
            servings: default_servings(),
            time_minutes: default_time_minutes(),
            difficulty,
            ingredient_load,
            tags: Vec::new(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }
}

/// Split a comma-separated tag list, trimming and dropping blanks
pub fn split_tags(text: &str) -> Vec<String> {
    split_on(text, ',')
}

/// Split multi-line text into one entry per non-blank line
pub fn split_lines(text: &str) -> Vec<String> {
    split_on(text, '\n')
}

fn split_on(text: &str, sep: char) -> Vec<String> {
    text.split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
