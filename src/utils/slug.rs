//! Post slug derivation and URL helpers.
//!
//! A post's slug is its route: `content/mind/hello.mdx` becomes `mind/hello`
//! and is served at `/mind/hello`.

use crate::config::SlugMode;
use std::path::{Component, Path};

/// Characters forbidden in URL path segments
const FORBIDDEN_CHARS: &[char] = &[
    '<', '>', ':', '|', '?', '*', '#', '\\', '(', ')', '[', ']', '\t', '\r', '\n',
];

// ============================================================================
// Slugification
// ============================================================================

/// Derive the raw slug from a content-relative path.
///
/// `mind/hello.mdx` → `mind/hello`. Separators are always `/`.
pub fn slug_from_path(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    without_ext
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Normalize a slug segment by segment according to the configured mode.
///
/// Empty segments (leading, trailing or doubled `/`) and `.`/`..` are
/// dropped, so the result never starts or ends with a separator and never
/// climbs out of the directory it is joined onto.
pub fn normalize_slug(raw: &str, mode: &SlugMode) -> String {
    raw.split('/')
        .map(|segment| match mode {
            SlugMode::On => slug::slugify(segment),
            SlugMode::Safe => sanitize_text(segment),
            SlugMode::No => segment.trim().to_owned(),
        })
        .filter(|segment| !matches!(segment.as_str(), "" | "." | ".."))
        .collect::<Vec<_>>()
        .join("/")
}

/// Remove forbidden characters and replace whitespace with underscores
fn sanitize_text(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

// ============================================================================
// URLs
// ============================================================================

/// URL path of a post: `/<prefix>/<slug>`, or `/<slug>` without a prefix.
pub fn post_url(path_prefix: &str, slug: &str) -> String {
    let prefix = path_prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("/{slug}")
    } else {
        format!("/{prefix}/{slug}")
    }
}
