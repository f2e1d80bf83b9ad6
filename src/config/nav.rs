//! `[nav]` section configuration.
//!
//! Fallback destination for a previous/next link whose neighbor is absent.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[nav]` section in quire.toml.
///
/// # Example
/// ```toml
/// [nav]
/// fallback_href = "/"
/// fallback_label = "Home"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct NavConfig {
    /// Where a missing neighbor link points.
    #[serde(default = "defaults::nav::fallback_href")]
    #[educe(Default = defaults::nav::fallback_href())]
    pub fallback_href: String,

    /// Text shown on a missing neighbor link.
    #[serde(default = "defaults::nav::fallback_label")]
    #[educe(Default = defaults::nav::fallback_label())]
    pub fallback_label: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_nav_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.nav.fallback_href, "/");
        assert_eq!(config.nav.fallback_label, "");
    }

    #[test]
    fn test_nav_config_custom() {
        let config = r#"
            [nav]
            fallback_href = "/posts"
            fallback_label = "All posts"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.nav.fallback_href, "/posts");
        assert_eq!(config.nav.fallback_label, "All posts");
    }
}
