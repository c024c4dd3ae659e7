// src/main.rs

use anyhow::Result;
use clap::{CommandFactory, Parser};
use rezepte::Config;
use tracing::debug;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;
    debug!("Using database {}", config.db_path.display());

    match cli.command {
        Some(Commands::Init { db_path }) => commands::cmd_init(&config, db_path),

        Some(Commands::Add { recipe, db_path }) => {
            commands::cmd_add(&config, recipe.into_draft(), db_path)
        }

        Some(Commands::Import { path, db_path }) => commands::cmd_import(&config, &path, db_path),

        Some(Commands::Show {
            recipe,
            json,
            db_path,
        }) => commands::cmd_show(&config, &recipe, json, db_path),

        Some(Commands::Delete { id, db_path }) => commands::cmd_delete(&config, id, db_path),

        Some(Commands::Search {
            query,
            limit,
            db_path,
        }) => commands::cmd_search(&config, query.as_deref(), limit, db_path),

        Some(Commands::List { limit, db_path }) => commands::cmd_list(&config, limit, db_path),

        Some(Commands::Reindex { db_path }) => commands::cmd_reindex(&config, db_path),

        Some(Commands::Check { db_path }) => commands::cmd_check(&config, db_path),

        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "rezepte",
                &mut std::io::stdout(),
            );
            Ok(())
        }

        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
