use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use flashdeck::catalog::Catalog;
use flashdeck::cli::{render_deck, render_list, Cli, Command};
use flashdeck::config::Config;
use flashdeck::logging::{init_tracing, LogTarget};
use flashdeck::ui::runtime;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui { mode: None });

    let (config_path, loaded) = match cli.config {
        Some(path) => {
            let loaded = Config::load_from(&path);
            (path, loaded)
        }
        None => (Config::config_path(), Config::load()),
    };
    let mut config = loaded
        .with_context(|| format!("Failed to load config from '{}'", config_path.display()))?;

    let target = match command {
        Command::Tui { .. } => LogTarget::File,
        Command::List { .. } | Command::Show { .. } => LogTarget::Stderr,
    };
    init_tracing(&config.logging, target)?;

    let catalog = Catalog::with_extra_builtins(config.extra_decks());
    info!(decks = catalog.len(), config = %config_path.display(), "Catalog ready");

    match command {
        Command::Tui { mode } => {
            if let Some(mode) = mode {
                config.study.default_mode = mode;
            }
            runtime::run(catalog, &config).context("Terminal front-end failed")?
        }
        Command::List { json } => print!("{}", render_list(&catalog, json)?),
        Command::Show { deck } => print!("{}", render_deck(&catalog, &deck)?),
    }
    Ok(())
}
