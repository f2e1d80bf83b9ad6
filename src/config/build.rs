//! `[build]` section configuration.
//!
//! Contains content discovery, output layout, slug and robots settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Enums
// ============================================================================

/// URL slug generation mode for post routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Always convert to ASCII slug (e.g., "Hello World" → "hello-world").
    On,
    /// Strip URL-forbidden characters, keep everything else (default).
    #[default]
    Safe,
    /// No slugification; preserve original text.
    No,
}

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in quire.toml.
///
/// # Example
/// ```toml
/// [build]
/// content = "posts"
/// output = "public"
/// extensions = ["mdx"]
///
/// [build.slug]
/// mode = "on"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// URL path prefix for subdirectory deployment (e.g., "blog" → `/blog/...`).
    #[serde(default = "defaults::build::path_prefix")]
    #[educe(Default = defaults::build::path_prefix())]
    pub path_prefix: String,

    /// Post source directory.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Data directory inside the output, for the JSON consumed by pages.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// File extensions treated as posts.
    #[serde(default = "defaults::build::extensions")]
    #[educe(Default = defaults::build::extensions())]
    pub extensions: Vec<String>,

    /// Remove the output directory before building.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Slug normalization settings.
    #[serde(default)]
    pub slug: SlugConfig,

    /// robots.txt generation settings.
    #[serde(default)]
    pub robots: RobotsConfig,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.slug]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SlugConfig {
    /// How post slugs are normalized
    #[serde(default = "defaults::build::slug::mode")]
    #[educe(Default = defaults::build::slug::mode())]
    pub mode: SlugMode,
}

/// `[build.robots]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RobotsConfig {
    /// Write robots.txt at the output root.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output path, relative to the output directory.
    #[serde(default = "defaults::build::robots::path")]
    #[educe(Default = defaults::build::robots::path())]
    pub path: PathBuf,

    /// Sitemap file name advertised under `[base].url`.
    #[serde(default = "defaults::build::robots::sitemap")]
    #[educe(Default = defaults::build::robots::sitemap())]
    pub sitemap: String,
}
