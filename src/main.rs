//! Quire - post ordering and navigation data for a markdown/mdx blog.

use anyhow::{Result, bail};
use clap::Parser;
use quire::{
    build::build_site,
    cli::{Cli, Commands},
    config::SiteConfig,
    init::new_site,
    query::{list_categories, list_posts, random_post, show_nav},
};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Init { name } => new_site(&config, name.is_some()),
        Commands::Build { .. } => build_site(&config),
        Commands::List { category } => list_posts(&config, category.as_deref()),
        Commands::Nav { slug } => show_nav(&config, slug),
        Commands::Categories => list_categories(&config),
        Commands::Random { seed, exclude } => random_post(&config, *seed, exclude.as_deref()),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    // Validate config state based on command
    let config_exists = config.config_path.exists();
    match (cli.is_init(), config_exists) {
        (true, true) => {
            bail!("Config file already exists. Remove it manually or init in a different path.")
        }
        (false, false) => bail!("Config file not found."),
        _ => {}
    }

    config.validate(cli)?;
    Ok(config)
}
