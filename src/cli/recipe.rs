// src/cli/recipe.rs
//! Recipe fields accepted on the command line

use clap::Args;
use rezepte::recipe::{split_lines, split_tags, RecipeDraft};

#[derive(Args)]
pub struct RecipeArgs {
    /// Recipe title (3-120 characters)
    #[arg(short, long)]
    pub title: String,

    /// Number of servings (1-20)
    #[arg(long, default_value_t = 2)]
    pub servings: i64,

    /// Preparation time in minutes (1-480)
    #[arg(long = "time", default_value_t = 30)]
    pub time_minutes: i64,

    /// 1 = easy, 2 = medium, 3 = elaborate
    #[arg(long)]
    pub difficulty: i64,

    /// 1 = few, 2 = medium, 3 = many ingredients
    #[arg(long)]
    pub ingredient_load: i64,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Ingredient line (repeatable; multi-line values give one entry per line)
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Preparation step (repeatable, in order; multi-line values give one step per line)
    #[arg(short, long = "step")]
    pub steps: Vec<String>,
}

impl RecipeArgs {
    pub fn into_draft(self) -> RecipeDraft {
        RecipeDraft {
            title: self.title,
            servings: self.servings,
            time_minutes: self.time_minutes,
            difficulty: self.difficulty,
            ingredient_load: self.ingredient_load,
            tags: self.tags.as_deref().map(split_tags).unwrap_or_default(),
            ingredients: self.ingredients.iter().flat_map(|s| split_lines(s)).collect(),
            steps: self.steps.iter().flat_map(|s| split_lines(s)).collect(),
        }
    }
}
