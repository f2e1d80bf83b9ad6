//! JSON data files consumed by the site's pages.
//!
//! # Output Layout
//!
//! ```text
//! <output>/<data>/
//! ├── posts.json            all posts, newest first, with their url
//! ├── categories.json       [{ name, count }] in first-appearance order
//! └── nav/
//!     └── mind/hello.json   previous/next links, indicator, suggestion
//! ```

use super::nav::NavView;
use crate::{
    config::SiteConfig,
    log,
    post::{OrderedPosts, Position, Post, category::categories, resolve, suggest},
    utils::slug::post_url,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::{collections::HashSet, fs, path::Path};

/// A post as listed in posts.json.
#[derive(Debug, Serialize)]
struct PostEntry<'a> {
    #[serde(flatten)]
    post: &'a Post,
    url: String,
}

/// The "more for you" pick attached to every nav file.
#[derive(Debug, Serialize)]
struct Suggestion<'a> {
    href: String,
    title: &'a str,
    subtitle: &'a str,
    category: &'a str,
}

/// Contents of nav/<slug>.json.
#[derive(Debug, Serialize)]
struct PostNav<'a> {
    slug: &'a str,
    #[serde(flatten)]
    view: NavView,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<Suggestion<'a>>,
}

/// Write every data file for `sequence`. Returns the number of nav files.
pub fn build_data(config: &SiteConfig, sequence: &OrderedPosts<'_>) -> Result<usize> {
    let dir = config.data_dir();
    let prefix = config.build.path_prefix.as_str();

    let entries: Vec<PostEntry<'_>> = sequence
        .iter()
        .map(|post| PostEntry {
            post,
            url: post_url(prefix, &post.slug),
        })
        .collect();
    write_json(&dir.join("posts.json"), &entries)?;
    write_json(&dir.join("categories.json"), &categories(sequence))?;

    let targets = nav_targets(sequence);
    targets
        .par_iter()
        .try_for_each(|&(position, post)| write_nav(config, sequence, position, post, &dir))?;

    log!("data"; "{} nav files in {}", targets.len(), dir.display());
    Ok(targets.len())
}

/// Positions that get a nav file.
///
/// Duplicate slugs share one file path, so the newest post with a slug
/// (the first in sequence order) owns it and later ones are skipped.
fn nav_targets<'a>(sequence: &OrderedPosts<'a>) -> Vec<(usize, &'a Post)> {
    let mut seen = HashSet::with_capacity(sequence.len());
    sequence
        .iter()
        .enumerate()
        .filter(|(_, post)| seen.insert(post.slug.as_str()))
        .collect()
}

fn write_nav(
    config: &SiteConfig,
    sequence: &OrderedPosts<'_>,
    position: usize,
    post: &Post,
    dir: &Path,
) -> Result<()> {
    let prefix = config.build.path_prefix.as_str();
    let result = resolve(sequence, Position::Found(position));
    let pick = suggest::suggest(
        sequence,
        suggest::seed_from_slug(&post.slug),
        Some(&post.slug),
    )
    .filter(|pick| pick.slug != post.slug);

    let nav = PostNav {
        slug: &post.slug,
        view: NavView::present(&result, &config.nav, prefix),
        suggestion: pick.map(|pick| Suggestion {
            href: post_url(prefix, &pick.slug),
            title: &pick.title,
            subtitle: &pick.subtitle,
            category: &pick.category,
        }),
    };

    let path = dir.join("nav").join(format!("{}.json", post.slug));
    write_json(&path, &nav)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
