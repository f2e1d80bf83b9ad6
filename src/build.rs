//! Site building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output() ──► clear output when [build].clean
//!     │
//!     ├── PostStore::load() ──► ordered() once
//!     │
//!     └── rayon::join
//!             ├── build_data()   ──► posts.json, categories.json, nav/*.json
//!             └── build_robots() ──► robots.txt
//! ```

use crate::{
    config::SiteConfig,
    generator::{data::build_data, robots::build_robots},
    log,
    post::PostStore,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Build every output file for the site.
///
/// If `config.build.clean` is true, clears the output directory first.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    prepare_output(&config.build.output, config.build.clean)?;

    let store = PostStore::load(config).with_context(|| {
        format!("Failed to load posts from {}", config.build.content.display())
    })?;
    let sequence = store.ordered();
    log!("build"; "loaded {} posts", store.len());

    let (data_result, robots_result) = rayon::join(
        || build_data(config, &sequence),
        || build_robots(config),
    );
    robots_result?;
    let written = data_result?;

    if written == 0 {
        log!("warn"; "no posts found, check [build].content and [build].extensions");
    } else {
        log!("build"; "done");
    }
    Ok(())
}

fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site(dir: &TempDir) -> SiteConfig {
        let content = dir.path().join("content");
        fs::create_dir_all(content.join("mind")).unwrap();
        fs::write(
            content.join("mind/hello.mdx"),
            "---\ntitle: Hello\ndate: 2024-01-01\ncategory: mind\n---\n",
        )
        .unwrap();
        fs::write(
            content.join("second.md"),
            "---\ntitle: Second\ndate: 2024-02-01\n---\n",
        )
        .unwrap();

        let mut config = SiteConfig::default();
        config.build.content = content;
        config.build.output = dir.path().join("public");
        config
    }

    #[test]
    fn test_build_site_writes_outputs() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);

        build_site(&config).unwrap();

        let data = config.data_dir();
        assert!(data.join("posts.json").is_file());
        assert!(data.join("categories.json").is_file());
        assert!(data.join("nav/mind/hello.json").is_file());
        assert!(data.join("nav/second.json").is_file());
        assert!(config.build.output.join("robots.txt").is_file());
    }

    #[test]
    fn test_build_site_clean_removes_stale_files() {
        let dir = TempDir::new().unwrap();
        let mut config = site(&dir);
        fs::create_dir_all(&config.build.output).unwrap();
        let stale = config.build.output.join("stale.html");
        fs::write(&stale, "old").unwrap();

        config.build.clean = true;
        build_site(&config).unwrap();
        assert!(!stale.exists());
    }

    #[test]
    fn test_build_site_keeps_files_without_clean() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        fs::create_dir_all(&config.build.output).unwrap();
        let kept = config.build.output.join("kept.html");
        fs::write(&kept, "old").unwrap();

        build_site(&config).unwrap();
        assert!(kept.exists());
    }

    #[test]
    fn test_build_site_fails_on_broken_post() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        fs::write(config.build.content.join("broken.md"), "---\ntitle: x\n").unwrap();

        assert!(build_site(&config).is_err());
    }
}
