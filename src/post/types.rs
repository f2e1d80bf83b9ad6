//! Post record types.

use crate::utils::date::DateTimeUtc;
use serde::Serialize;
use std::path::PathBuf;

/// A single post as loaded from the content directory.
///
/// `date` keeps the text exactly as written; `published` is its parsed
/// instant, absent when the text is malformed or missing. Ordering only ever
/// looks at `published`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Route and lookup key, never empty.
    pub slug: String,

    pub title: String,

    pub subtitle: String,

    pub category: String,

    /// Date as written in frontmatter.
    pub date: String,

    #[serde(skip)]
    pub published: Option<DateTimeUtc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Source file, empty for posts built in memory.
    #[serde(skip)]
    pub source: PathBuf,
}

impl Post {
    /// Build a post from its slug and date text; everything else empty.
    pub fn new(slug: impl Into<String>, date: impl Into<String>) -> Self {
        let date = date.into();
        Self {
            slug: slug.into(),
            title: String::new(),
            subtitle: String::new(),
            category: String::new(),
            published: DateTimeUtc::parse(&date),
            date,
            description: None,
            quote: None,
            thumbnail: None,
            source: PathBuf::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// True when `date` did not parse to an instant.
    pub fn has_malformed_date(&self) -> bool {
        self.published.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parses_date() {
        let post = Post::new("hello", "2024-05-01");
        assert_eq!(post.published, Some(DateTimeUtc::from_ymd(2024, 5, 1)));
        assert!(!post.has_malformed_date());
    }

    #[test]
    fn test_new_keeps_malformed_date_text() {
        let post = Post::new("hello", "someday");
        assert_eq!(post.date, "someday");
        assert!(post.has_malformed_date());
    }

    #[test]
    fn test_serialize_skips_internal_fields() {
        let post = Post::new("mind/hello", "2024-05-01")
            .with_title("Hello")
            .with_category("mind");
        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(json["slug"], "mind/hello");
        assert_eq!(json["date"], "2024-05-01");
        assert_eq!(json["category"], "mind");
        assert!(json.get("published").is_none());
        assert!(json.get("source").is_none());
        assert!(json.get("quote").is_none());
    }
}
