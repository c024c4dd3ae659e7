// src/recipe/mod.rs

//! Recipe record model
//!
//! A [`Recipe`] can only be obtained by validating a [`RecipeDraft`], so every
//! value of the type already satisfies the field constraints:
//!
//! - title: 3 to 120 characters after trimming
//! - servings: 1 to 20
//! - time_minutes: 1 to 480
//! - difficulty / ingredient_load: 1 to 3
//! - tags, ingredients, steps: trimmed, blank entries dropped, order kept
//!
//! Deserializing a `Recipe` goes through the same validation.
//!
//! # Example
//!
//! ```
//! use rezepte::recipe::{Difficulty, IngredientLoad, Recipe, RecipeDraft};
//!
//! let mut draft = RecipeDraft::new("Knoblauchsuppe", 1, 2);
//! draft.ingredients = vec![" 6 Zehen Knoblauch ".into(), "".into(), "1 l Brühe".into()];
//! let recipe = Recipe::try_from(draft).unwrap();
//!
//! assert_eq!(recipe.difficulty(), Difficulty::Easy);
//! assert_eq!(recipe.ingredient_load(), IngredientLoad::Medium);
//! assert_eq!(recipe.ingredients_text(), "6 Zehen Knoblauch\n1 l Brühe");
//! ```

mod draft;
mod validation;

pub use draft::{split_lines, split_tags, RecipeDraft};
pub use validation::{ValidationError, Violation};

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much effort a recipe takes (stored as 1..=3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Elaborate = 3,
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Elaborate => "elaborate",
        }
    }
}

impl From<Difficulty> for i64 {
    fn from(value: Difficulty) -> Self {
        value as i64
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = String;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Elaborate),
            _ => Err(format!("Invalid difficulty: {value}")),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many ingredients a recipe needs (stored as 1..=3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum IngredientLoad {
    Few = 1,
    Medium = 2,
    Many = 3,
}

impl IngredientLoad {
    pub fn as_str(&self) -> &str {
        match self {
            IngredientLoad::Few => "few",
            IngredientLoad::Medium => "medium",
            IngredientLoad::Many => "many",
        }
    }
}

impl From<IngredientLoad> for i64 {
    fn from(value: IngredientLoad) -> Self {
        value as i64
    }
}

impl TryFrom<i64> for IngredientLoad {
    type Error = String;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(IngredientLoad::Few),
            2 => Ok(IngredientLoad::Medium),
            3 => Ok(IngredientLoad::Many),
            _ => Err(format!("Invalid ingredient load: {value}")),
        }
    }
}

impl fmt::Display for IngredientLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecipeDraft")]
pub struct Recipe {
    title: String,
    servings: u32,
    time_minutes: u32,
    difficulty: Difficulty,
    ingredient_load: IngredientLoad,
    tags: Vec<String>,
    ingredients: Vec<String>,
    steps: Vec<String>,
}

impl Recipe {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn time_minutes(&self) -> u32 {
        self.time_minutes
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn ingredient_load(&self) -> IngredientLoad {
        self.ingredient_load
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Tags joined with commas, as stored in the `tags` column
    pub fn tags_text(&self) -> String {
        self.tags.join(",")
    }

    /// Ingredients joined with newlines, as indexed for search
    pub fn ingredients_text(&self) -> String {
        self.ingredients.join("\n")
    }

    /// Steps joined with newlines, as indexed for search
    pub fn steps_text(&self) -> String {
        self.steps.join("\n")
    }

    /// Turn the recipe back into an editable draft
    pub fn into_draft(self) -> RecipeDraft {
        RecipeDraft {
            title: self.title,
            servings: i64::from(self.servings),
            time_minutes: i64::from(self.time_minutes),
            difficulty: self.difficulty.into(),
            ingredient_load: self.ingredient_load.into(),
            tags: self.tags,
            ingredients: self.ingredients,
            steps: self.steps,
        }
    }
}

impl TryFrom<RecipeDraft> for Recipe {
    type Error = ValidationError;

    fn try_from(draft: RecipeDraft) -> std::result::Result<Self, Self::Error> {
        validation::validate(draft)
    }
}
