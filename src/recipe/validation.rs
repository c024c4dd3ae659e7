// src/recipe/validation.rs

//! Field constraints for recipes

use super::draft::RecipeDraft;
use super::{Difficulty, IngredientLoad, Recipe};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const TITLE_CHARS: RangeInclusive<usize> = 3..=120;
pub const SERVINGS: RangeInclusive<i64> = 1..=20;
pub const TIME_MINUTES: RangeInclusive<i64> = 1..=480;
pub const LEVEL: RangeInclusive<i64> = 1..=3;

/// A single violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("title must be {min} to {max} characters, got {chars}")]
    TitleLength { chars: usize, min: usize, max: usize },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Every constraint a draft violated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn check_range(
    violations: &mut Vec<Violation>,
    field: &'static str,
    value: i64,
    range: &RangeInclusive<i64>,
) {
    if !range.contains(&value) {
        violations.push(Violation::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
}

fn check_level<T: TryFrom<i64>>(
    violations: &mut Vec<Violation>,
    field: &'static str,
    value: i64,
) -> Option<T> {
    check_range(violations, field, value, &LEVEL);
    T::try_from(value).ok()
}

fn normalize(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Normalize list fields and check every constraint, collecting all failures
pub(super) fn validate(draft: RecipeDraft) -> Result<Recipe, ValidationError> {
    let mut violations = Vec::new();

    let title = draft.title.trim().to_string();
    let chars = title.chars().count();
    if !TITLE_CHARS.contains(&chars) {
        violations.push(Violation::TitleLength {
            chars,
            min: *TITLE_CHARS.start(),
            max: *TITLE_CHARS.end(),
        });
    }

    check_range(&mut violations, "servings", draft.servings, &SERVINGS);
    check_range(&mut violations, "time_minutes", draft.time_minutes, &TIME_MINUTES);
    let difficulty: Option<Difficulty> = check_level(&mut violations, "difficulty", draft.difficulty);
    let ingredient_load: Option<IngredientLoad> =
        check_level(&mut violations, "ingredient_load", draft.ingredient_load);

    let (Some(difficulty), Some(ingredient_load), true) =
        (difficulty, ingredient_load, violations.is_empty())
    else {
        return Err(ValidationError { violations });
    };

    Ok(Recipe {
        title,
        servings: draft.servings as u32,
        time_minutes: draft.time_minutes as u32,
        difficulty,
        ingredient_load,
        tags: normalize(draft.tags),
        ingredients: normalize(draft.ingredients),
        steps: normalize(draft.steps),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_boundary() {
        assert!(Recipe::try_from(RecipeDraft::new("Ei", 1, 1)).is_err());
        assert!(Recipe::try_from(RecipeDraft::new("Tee", 1, 1)).is_ok());

        let long = "x".repeat(121);
        assert!(Recipe::try_from(RecipeDraft::new(long, 1, 1)).is_err());
        let max = "x".repeat(120);
        assert!(Recipe::try_from(RecipeDraft::new(max, 1, 1)).is_ok());
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        // "Öl" is 2 chars but 3 bytes
        assert!(Recipe::try_from(RecipeDraft::new("Öl", 1, 1)).is_err());
        assert!(Recipe::try_from(RecipeDraft::new("Öle", 1, 1)).is_ok());
    }

    #[test]
    fn test_title_is_trimmed_before_length_check() {
        let err = Recipe::try_from(RecipeDraft::new("  Ei  ", 1, 1)).unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation::TitleLength { chars: 2, min: 3, max: 120 }]
        );
    }

    #[test]
    fn test_reports_every_violation() {
        let mut draft = RecipeDraft::new("", 0, 4);
        draft.servings = 21;
        draft.time_minutes = 0;

        let err = Recipe::try_from(draft).unwrap_err();
        assert_eq!(err.violations().len(), 5);
        assert!(err.violations().contains(&Violation::OutOfRange {
            field: "servings",
            value: 21,
            min: 1,
            max: 20,
        }));
        let message = err.to_string();
        assert!(message.contains("title"));
        assert!(message.contains("time_minutes"));
        assert!(message.contains("ingredient_load"));
    }

    #[test]
    fn test_error_message_joins_violations() {
        let mut draft = RecipeDraft::new("Ei", 1, 1);
        draft.servings = 0;

        let err = Recipe::try_from(draft).unwrap_err();
        assert_eq!(
            err.to_string(),
            "title must be 3 to 120 characters, got 2; servings must be between 1 and 20, got 0"
        );
        let as_error: &dyn std::error::Error = &err;
        assert!(as_error.source().is_none());
    }

    #[test]
    fn test_range_edges_accepted() {
        let mut draft = RecipeDraft::new("Braten", 3, 3);
        draft.servings = 20;
        draft.time_minutes = 480;
        assert!(Recipe::try_from(draft).is_ok());
    }

    #[test]
    fn test_lists_are_normalized() {
        let mut draft = RecipeDraft::new("Salat", 1, 1);
        draft.tags = vec![" frisch".into(), "  ".into(), "frisch".into()];
        draft.ingredients = vec!["".into(), " Gurke ".into()];
        draft.steps = vec!["\tSchneiden\n".into()];

        let recipe = Recipe::try_from(draft).unwrap();
        assert_eq!(recipe.tags(), ["frisch", "frisch"]);
        assert_eq!(recipe.ingredients(), ["Gurke"]);
        assert_eq!(recipe.steps(), ["Schneiden"]);
    }
}
