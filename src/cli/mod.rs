// src/cli/mod.rs
//! CLI definitions for rezepte
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! Every command that touches the database accepts `--db-path`; without it
//! the path comes from `--config`, then `REZEPTE_DB`, then the platform
//! data directory.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

mod recipe;

pub use recipe::RecipeArgs;

#[derive(Parser)]
#[command(name = "rezepte")]
#[command(author = "Rezepte Contributors")]
#[command(version)]
#[command(about = "Save recipes and find them again with full-text search", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the recipe database
    Init {
        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },

    /// Save a new recipe
    Add {
        #[command(flatten)]
        recipe: RecipeArgs,

        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },

    /// Save a recipe from a JSON or TOML file
    ///
    /// The file holds the recipe fields: title, difficulty and
    /// ingredient_load are required; servings defaults to 2, time_minutes
    /// to 30, and tags/ingredients/steps to empty lists.
    Import {
        /// Recipe file (.json or .toml)
        path: PathBuf,

        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },

    /// Show a saved recipe
    Show {
        /// Recipe id or slug
        #[arg(allow_hyphen_values = true)]
        recipe: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },

    /// Delete a saved recipe
    Delete {
        /// Recipe id
        id: i64,

        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },

    /// Search saved recipes
    ///
    /// Uses SQLite FTS5 query syntax over title, ingredients and steps,
    /// e.g. `knoblauch`, `"rote linsen"`, `title:suppe OR curry`.
    /// Without a query the newest recipes are listed.
    Search {
        /// Full-text query
        query: Option<String>,

        /// Maximum number of results (default from config, 25)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },

    /// List the most recently saved recipes
    List {
        /// Maximum number of results (default from config, 25)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },

    /// Rebuild the search index from the saved recipes
    Reindex {
        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },

    /// Verify that every recipe has exactly one search index entry
    Check {
        /// Path to the database file
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
