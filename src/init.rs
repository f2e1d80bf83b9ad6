//! Site initialization module.
//!
//! Creates a new site with a content directory, a sample post and the
//! default configuration.

use crate::config::SiteConfig;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

const SAMPLE_POST: &str = "hello.mdx";

const SAMPLE_POST_BODY: &str = "\
---
title: Hello, world
subtitle: The first post
date: 2024-01-01
category: notes
---

Write your first post here.
";

/// Create a new site with default structure
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Without a name the site goes into the current directory, which must be empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `quire init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_content(&config.build.content)?;
    init_default_config(&config.config_path)?;
    init_ignored_files(root, &[config.build.output.as_path()])?;

    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Create the content directory with one sample post
fn init_content(content: &Path) -> Result<()> {
    if content.exists() {
        bail!(
            "Path `{}` already exists. Try `quire init <SITE_NAME>` instead.",
            content.display()
        );
    }
    fs::create_dir_all(content)
        .with_context(|| format!("Failed to create {}", content.display()))?;
    fs::write(content.join(SAMPLE_POST), SAMPLE_POST_BODY)?;
    Ok(())
}

/// Initialize .gitignore and .ignore files with specified paths
fn init_ignored_files(root: &Path, paths: &[&Path]) -> Result<()> {
    let content = paths
        .iter()
        .map(|p| p.strip_prefix(root).unwrap_or(p))
        .filter_map(|p| p.to_str())
        .collect::<Vec<_>>()
        .join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::PostStore;
    use tempfile::TempDir;

    const CONFIG_FILE: &str = "quire.toml";

    fn config_at(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(root);
        config.config_path = root.join(CONFIG_FILE);
        config.build.content = root.join("content");
        config.build.output = root.join("public");
        config
    }

    #[test]
    fn test_new_site_creates_layout() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("blog");
        let config = config_at(&root);

        new_site(&config, true).unwrap();

        assert!(root.join("content").join(SAMPLE_POST).is_file());
        assert_eq!(fs::read_to_string(root.join(".gitignore")).unwrap(), "public");

        let written = fs::read_to_string(root.join(CONFIG_FILE)).unwrap();
        let parsed = SiteConfig::from_str(&written).unwrap();
        assert_eq!(parsed.build.output, SiteConfig::default().build.output);
    }

    #[test]
    fn test_new_site_sample_post_loads() {
        let dir = TempDir::new().unwrap();
        let config = config_at(dir.path());

        new_site(&config, false).unwrap();

        let store = PostStore::load(&config).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.posts()[0].slug, "hello");
        assert_eq!(store.posts()[0].category, "notes");
    }

    #[test]
    fn test_new_site_refuses_non_empty_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("file.txt"), "x").unwrap();

        assert!(new_site(&config_at(dir.path()), false).is_err());
    }
}
