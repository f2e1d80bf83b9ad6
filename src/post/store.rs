//! The post store.
//!
//! Loads every post under the content directory once and never mutates it
//! afterwards. All readers share the same memoized newest-first order.
//!
//! # Loading
//!
//! ```text
//! content/
//! ├── essay/first.mdx   ──► slug "essay/first"
//! ├── mind/hello.md     ──► slug "mind/hello" (or frontmatter `slug`)
//! └── notes.txt         ──► skipped (extension not in [build].extensions)
//! ```
//!
//! Files are visited in path order so the input order, and with it the
//! tie-break between posts sharing a date, is the same on every run.

use super::{
    error::PostError,
    frontmatter::{Frontmatter, parse_frontmatter},
    order::{OrderedPosts, order_indices},
    types::Post,
};
use crate::{
    config::{SiteConfig, SlugMode},
    log,
    utils::slug::{normalize_slug, slug_from_path},
};
use rayon::prelude::*;
use std::{
    collections::HashSet,
    fmt, fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};
use walkdir::WalkDir;

/// Immutable collection of posts with a lazily computed order.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    order: OnceLock<Vec<usize>>,
}

impl PostStore {
    /// Build a store from posts already in memory, keeping their order as
    /// the input order.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            order: OnceLock::new(),
        }
    }

    /// Load all posts under `[build].content`.
    ///
    /// Malformed dates and duplicate slugs are reported through the logger
    /// and do not fail the load.
    pub fn load(config: &SiteConfig) -> Result<Self, PostError> {
        let content_dir = &config.build.content;
        let files = collect_post_files(content_dir, &config.build.extensions)?;

        let posts = files
            .par_iter()
            .map(|path| load_post(path, content_dir, &config.build.slug.mode))
            .collect::<Result<Vec<_>, _>>()?;

        report_diagnostics(&posts);
        Ok(Self::from_posts(posts))
    }

    /// Posts in input order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Newest-first view, sorted on first call and shared afterwards.
    pub fn ordered(&self) -> OrderedPosts<'_> {
        let indices = self.order.get_or_init(|| order_indices(&self.posts));
        OrderedPosts::from_indices(&self.posts, indices)
    }
}

/// Collect post files under `dir` in path order.
fn collect_post_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, PostError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|err| PostError::Walk(dir.to_path_buf(), err))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_post = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)));
        if is_post {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Read and parse one post file.
fn load_post(path: &Path, content_dir: &Path, mode: &SlugMode) -> Result<Post, PostError> {
    let source = fs::read_to_string(path).map_err(|err| PostError::Io(path.to_path_buf(), err))?;
    let frontmatter =
        parse_frontmatter(&source).map_err(|err| PostError::Frontmatter(path.to_path_buf(), err))?;

    let relative = path.strip_prefix(content_dir).unwrap_or(path);
    let post = build_post(frontmatter, &slug_from_path(relative), mode);

    if post.slug.is_empty() {
        return Err(PostError::EmptySlug(path.to_path_buf()));
    }
    Ok(Post {
        source: path.to_path_buf(),
        ..post
    })
}

/// Turn parsed frontmatter into a post.
///
/// A non-blank frontmatter `slug` wins over the path-derived one.
fn build_post(frontmatter: Frontmatter, path_slug: &str, mode: &SlugMode) -> Post {
    let Frontmatter {
        title,
        subtitle,
        date,
        category,
        slug,
        description,
        quote,
        thumbnail,
    } = frontmatter;

    let raw_slug = slug
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| path_slug.to_owned());

    Post {
        description,
        quote,
        thumbnail,
        ..Post::new(normalize_slug(&raw_slug, mode), date.unwrap_or_default())
            .with_title(title.unwrap_or_default())
            .with_subtitle(subtitle.unwrap_or_default())
            .with_category(category.unwrap_or_default())
    }
}

/// Something about a loaded post that will surprise a reader of the output
/// but does not stop the load.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Diagnostic<'a> {
    MissingDate { slug: &'a str },
    MalformedDate { slug: &'a str, raw: &'a str },
    DuplicateSlug { slug: &'a str, source: &'a Path },
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDate { slug } => write!(f, "`{slug}` has no date, sorting it last"),
            Self::MalformedDate { slug, raw } => {
                write!(f, "`{slug}` has malformed date `{raw}`, sorting it last")
            }
            Self::DuplicateSlug { slug, source } => {
                write!(f, "duplicate slug `{slug}` ({})", source.display())
            }
        }
    }
}

/// Diagnostics for `posts`, in input order.
fn diagnostics(posts: &[Post]) -> Vec<Diagnostic<'_>> {
    let mut found = Vec::new();
    let mut seen = HashSet::with_capacity(posts.len());

    for post in posts {
        if post.date.trim().is_empty() {
            found.push(Diagnostic::MissingDate { slug: &post.slug });
        } else if post.has_malformed_date() {
            found.push(Diagnostic::MalformedDate {
                slug: &post.slug,
                raw: &post.date,
            });
        }

        if !seen.insert(post.slug.as_str()) {
            found.push(Diagnostic::DuplicateSlug {
                slug: &post.slug,
                source: &post.source,
            });
        }
    }

    found
}

fn report_diagnostics(posts: &[Post]) {
    for diagnostic in diagnostics(posts) {
        log!("warn"; "{}", diagnostic);
    }
}
