//! Site configuration management for `quire.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url)             |
//! | `[build]`   | Content discovery, output layout, slugs        |
//! | `[nav]`     | Fallback for missing previous/next links       |
//! | `[extra]`   | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! url = "https://example.com"
//!
//! [build]
//! content = "content"
//! output = "public"
//!
//! [nav]
//! fallback_label = "Home"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod nav;

pub use build::SlugMode;
pub use error::ConfigError;
pub use nav::NavConfig;

use base::BaseConfig;
use build::BuildConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing quire.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Navigation presentation settings
    #[serde(default)]
    pub nav: NavConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Directory the JSON data files are written to.
    pub fn data_dir(&self) -> PathBuf {
        self.build.output.join(&self.build.data)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let base = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        if let Commands::Build { clean: true } = cli.command {
            self.build.clean = true;
        }

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_name: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_name));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self, cli: &Cli) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::invalid(
                "base.url",
                "must start with http:// or https://"
            ));
        }

        if self.build.extensions.iter().all(|ext| ext.trim().is_empty()) {
            bail!(ConfigError::invalid(
                "build.extensions",
                "must name at least one file extension"
            ));
        }

        if self.build.data.is_absolute() {
            bail!(ConfigError::invalid(
                "build.data",
                "must be relative to [build.output]"
            ));
        }

        match &cli.command {
            Commands::Init { .. } => {}
            _ if !self.build.content.is_dir() => {
                bail!(ConfigError::invalid(
                    "build.content",
                    format!("`{}` is not a directory", self.build.content.display())
                ));
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("quire").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            title = "My Blog"
            author = "Test Author"
        "#,
        )
        .unwrap();
        assert_eq!(config.base.title, "My Blog");
        assert_eq!(config.base.author, "Test Author");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[base\ntitle = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/definitely/not/here/quire.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read config"));
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_extra_fields() {
        let config: SiteConfig = toml::from_str(
            r#"
            [extra]
            mascot = "⛨"
            [extra.category_icons]
            mind = "💙"
        "#,
        )
        .unwrap();

        assert_eq!(
            config.extra.get("mascot").and_then(|v| v.as_str()),
            Some("⛨")
        );
        let icons = config.extra.get("category_icons").and_then(|v| v.as_table());
        assert_eq!(
            icons.and_then(|t| t.get("mind")).and_then(|v| v.as_str()),
            Some("💙")
        );
    }

    #[test]
    fn test_unknown_top_level_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[serve]\nport = 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_update_with_cli_resolves_paths_against_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = cli(&["-r", root, "-c", "posts", "build", "--clean"]);

        let mut config = SiteConfig::default();
        config.update_with_cli(&cli);

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.get_root(), root.as_path());
        assert_eq!(config.build.content, root.join("posts"));
        assert_eq!(config.build.output, root.join("public"));
        assert_eq!(config.config_path, root.join("quire.toml"));
        assert_eq!(config.data_dir(), root.join("public").join("_data"));
        assert!(config.build.clean);
    }

    #[test]
    fn test_update_with_cli_init_name_joins_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = cli(&["-r", root, "init", "blog"]);

        let mut config = SiteConfig::default();
        config.update_with_cli(&cli);

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.get_root(), root.join("blog").as_path());
        assert_eq!(config.config_path, root.join("blog").join("quire.toml"));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(&["-r", dir.path().to_str().unwrap(), "init"]);
        let mut config = SiteConfig::from_str("[base]\nurl = \"goodmind.kr\"").unwrap();
        config.update_with_cli(&cli);

        let err = config.validate(&cli).unwrap_err();
        assert!(err.to_string().contains("[base.url]"));
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(&["-r", dir.path().to_str().unwrap(), "init"]);
        let mut config = SiteConfig::from_str("[build]\nextensions = []").unwrap();
        config.update_with_cli(&cli);

        let err = config.validate(&cli).unwrap_err();
        assert!(err.to_string().contains("[build.extensions]"));
    }

    #[test]
    fn test_validate_requires_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(&["-r", dir.path().to_str().unwrap(), "list"]);
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli);
        assert!(config.validate(&cli).is_err());

        std::fs::create_dir(dir.path().join("content")).unwrap();
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli);
        assert!(config.validate(&cli).is_ok());
    }
}
