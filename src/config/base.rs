//! `[base]` section configuration.
//!
//! Contains basic site information like title, author, description, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in quire.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "굿마인드"
/// description = "A mindset blog"
/// author = "goodmind.kr"
/// url = "https://goodmind.kr"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title.
    #[serde(default)]
    pub title: String,

    /// Author name.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Site description.
    #[serde(default)]
    pub description: String,

    /// Site domain for absolute links (robots.txt sitemap line).
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "ko", "en-US").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}
