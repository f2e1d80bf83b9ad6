//! Read-only commands: `list`, `nav`, `categories` and `random`.
//!
//! Each loads the store, orders it once and prints to stdout. Status lines
//! go through `log!` on stderr; the answers themselves are plain text or JSON so
//! they can be piped.

use crate::{
    config::SiteConfig,
    generator::nav::NavView,
    log,
    post::{
        Post, PostStore,
        category::{categories, filter_by_category},
        suggest::{seed_from_clock, suggest},
    },
    utils::slug::post_url,
};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::io::{self, Write};

fn load_store(config: &SiteConfig) -> Result<PostStore> {
    PostStore::load(config)
        .with_context(|| format!("Failed to load posts from {}", config.build.content.display()))
}

/// Print posts newest first, optionally restricted to one category.
pub fn list_posts(config: &SiteConfig, category: Option<&str>) -> Result<()> {
    let store = load_store(config)?;
    let sequence = store.ordered();
    let posts = filter_by_category(&sequence, category);

    if posts.is_empty() {
        match category {
            Some(category) => log!("list"; "no posts in category `{}`", category),
            None => log!("list"; "no posts"),
        }
        return Ok(());
    }

    for post in posts {
        println!("{}", format_row(post));
    }
    Ok(())
}

/// Print the navigation view for `slug`. An unknown slug is an error.
pub fn show_nav(config: &SiteConfig, slug: &str) -> Result<()> {
    write_nav(&mut io::stdout().lock(), config, slug)
}

/// Write the navigation view as JSON to `out`. Nothing else goes to `out`,
/// so the result can be piped into a JSON consumer.
fn write_nav(out: &mut impl Write, config: &SiteConfig, slug: &str) -> Result<()> {
    let store = load_store(config)?;
    let sequence = store.ordered();
    let result = sequence.resolve_slug(slug);
    let view = NavView::present(&result, &config.nav, &config.build.path_prefix);

    serde_json::to_writer_pretty(&mut *out, &view)?;
    writeln!(out)?;

    if !result.is_found() {
        bail!("post `{}` not found among {} posts", slug, result.total);
    }
    Ok(())
}

/// Print distinct categories with their post counts.
pub fn list_categories(config: &SiteConfig) -> Result<()> {
    let store = load_store(config)?;
    let sequence = store.ordered();
    let summaries = categories(&sequence);

    if summaries.is_empty() {
        log!("categories"; "no categorized posts");
        return Ok(());
    }

    let width = summaries.iter().map(|c| c.name.chars().count()).max().unwrap_or(0);
    for summary in summaries {
        println!("{:<width$}  {}", summary.name, summary.count);
    }
    Ok(())
}

/// Print one randomly chosen post.
pub fn random_post(config: &SiteConfig, seed: Option<u64>, exclude: Option<&str>) -> Result<()> {
    let store = load_store(config)?;
    let sequence = store.ordered();

    match suggest(&sequence, seed.unwrap_or_else(seed_from_clock), exclude) {
        Some(post) => {
            println!("{}", format_row(post));
            println!("{}", post_url(&config.build.path_prefix, &post.slug));
        }
        None => log!("random"; "no posts"),
    }
    Ok(())
}

fn format_row(post: &Post) -> String {
    let date = match &post.published {
        Some(published) => published.ymd(),
        None if post.date.trim().is_empty() => "-".to_owned(),
        None => post.date.clone(),
    };
    let mut row = format!("{:<10}  {}", date.dimmed(), post.slug.bold());
    if !post.title.is_empty() {
        row.push_str(&format!("  {}", post.title));
    }
    if !post.category.is_empty() {
        row.push_str(&format!(" [{}]", post.category.cyan()));
    }
    row
}
