//! robots.txt generation.
//!
//! ```text
//! User-agent: *
//! Allow: /
//!
//! Sitemap: https://example.com/sitemap.xml
//! ```
//!
//! The sitemap line is only written when `[base].url` is set.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::fs;

/// Write robots.txt if enabled in config.
pub fn build_robots(config: &SiteConfig) -> Result<()> {
    if !config.build.robots.enable {
        return Ok(());
    }

    let path = config.build.output.join(&config.build.robots.path);
    let body = robots_txt(config.base.url.as_deref(), &config.build.robots.sitemap);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, body)
        .with_context(|| format!("Failed to write robots.txt to {}", path.display()))?;

    log!("robots"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

fn robots_txt(base_url: Option<&str>, sitemap: &str) -> String {
    let mut body = String::from("User-agent: *\nAllow: /\n");
    if let Some(url) = base_url {
        body.push_str(&format!(
            "\nSitemap: {}/{}\n",
            url.trim_end_matches('/'),
            sitemap.trim_start_matches('/')
        ));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_without_url() {
        assert_eq!(robots_txt(None, "sitemap.xml"), "User-agent: *\nAllow: /\n");
    }

    #[test]
    fn test_robots_with_url() {
        assert_eq!(
            robots_txt(Some("https://goodmind.kr/"), "/sitemap.xml"),
            "User-agent: *\nAllow: /\n\nSitemap: https://goodmind.kr/sitemap.xml\n"
        );
    }

    #[test]
    fn test_build_robots_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().join("public");
        config.base.url = Some("https://example.com".into());

        build_robots(&config).unwrap();

        let body = fs::read_to_string(dir.path().join("public/robots.txt")).unwrap();
        assert!(body.contains("Sitemap: https://example.com/sitemap.xml"));
    }

    #[test]
    fn test_build_robots_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();
        config.build.robots.enable = false;

        build_robots(&config).unwrap();
        assert!(!dir.path().join("robots.txt").exists());
    }
}
