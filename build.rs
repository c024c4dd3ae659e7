// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: database path
fn db_path_arg() -> Arg {
    Arg::new("db_path")
        .short('d')
        .long("db-path")
        .value_name("PATH")
        .help("Path to the database file")
}

fn limit_arg() -> Arg {
    Arg::new("limit")
        .short('l')
        .long("limit")
        .help("Maximum number of results (default from config, 25)")
}

fn build_cli() -> Command {
    Command::new("rezepte")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Rezepte Contributors")
        .about("Save recipes and find them again with full-text search")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Configuration file (TOML)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Show debug logging"),
        )
        .subcommand(
            Command::new("init")
                .about("Initialize the recipe database")
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("add")
                .about("Save a new recipe")
                .arg(Arg::new("title").short('t').long("title").required(true).help("Recipe title (3-120 characters)"))
                .arg(Arg::new("servings").long("servings").default_value("2").help("Number of servings (1-20)"))
                .arg(Arg::new("time").long("time").default_value("30").help("Preparation time in minutes (1-480)"))
                .arg(Arg::new("difficulty").long("difficulty").required(true).help("1 = easy, 2 = medium, 3 = elaborate"))
                .arg(Arg::new("ingredient_load").long("ingredient-load").required(true).help("1 = few, 2 = medium, 3 = many ingredients"))
                .arg(Arg::new("tags").long("tags").help("Comma-separated tags"))
                .arg(
                    Arg::new("ingredient")
                        .short('i')
                        .long("ingredient")
                        .action(ArgAction::Append)
                        .help("Ingredient line (repeatable)"),
                )
                .arg(
                    Arg::new("step")
                        .short('s')
                        .long("step")
                        .action(ArgAction::Append)
                        .help("Preparation step (repeatable, in order)"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("import")
                .about("Save a recipe from a JSON or TOML file")
                .arg(Arg::new("path").required(true).help("Recipe file (.json or .toml)"))
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show a saved recipe")
                .arg(
                    Arg::new("recipe")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Recipe id or slug"),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue).help("Print as JSON"))
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a saved recipe")
                .arg(Arg::new("id").required(true).help("Recipe id"))
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("search")
                .about("Search saved recipes")
                .arg(Arg::new("query").help("Full-text query; without one the newest recipes are listed"))
                .arg(limit_arg())
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("list")
                .about("List the most recently saved recipes")
                .arg(limit_arg())
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("reindex")
                .about("Rebuild the search index from the saved recipes")
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Verify that every recipe has exactly one search index entry")
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(Arg::new("shell").required(true).help("Shell to generate completions for")),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let mut buffer = Vec::new();
    if let Err(e) = Man::new(build_cli()).render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("rezepte.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
