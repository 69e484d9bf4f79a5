use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use env_logger::Env;
use swish::{
    Catalog,
    config::{Config, Settings, config_path},
    types::OutputFmt,
};

mod cli;
mod commands;

/// Read config, then pick the catalog: `--catalog`, the `catalog` key, or the built-in set.
fn setup(catalog_flag: Option<&Path>) -> Result<(Settings, Catalog)> {
    let cfg = Config::load(&config_path()?)?;
    let settings =
        Settings::try_from(&cfg).context("Invalid swish config (see `swish config list`)")?;

    let catalog = match catalog_flag.or(settings.catalog.as_deref()) {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Could not load catalog `{}`", path.display()))?,
        None => Catalog::sample(),
    };
    log::debug!("catalog has {} exercises", catalog.len());

    Ok((settings, catalog))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let fmt = if cli.json { OutputFmt::Json } else { OutputFmt::Text };
    let catalog_flag = cli.catalog.as_deref();

    match cli.cmd {
        Commands::Config(cmd) => commands::config::handle(cmd).await?,

        Commands::Catalog { kind, difficulty } => {
            let (_, catalog) = setup(catalog_flag)?;
            commands::catalog::handle(&catalog, kind, difficulty, fmt)?
        }

        Commands::Plan { params, count } => {
            let (settings, catalog) = setup(catalog_flag)?;
            commands::plan::handle(catalog, &settings, params, count, fmt)?
        }

        Commands::Train { params, tick_ms } => {
            let (settings, catalog) = setup(catalog_flag)?;
            commands::train::handle(catalog, &settings, params, tick_ms, fmt).await?
        }
    }

    Ok(())
}
