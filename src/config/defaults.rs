//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn language() -> String {
        "ko".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn path_prefix() -> String {
        "".into()
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn data() -> PathBuf {
        "_data".into()
    }

    pub fn extensions() -> Vec<String> {
        vec!["md".into(), "mdx".into()]
    }

    pub mod slug {
        use super::super::super::SlugMode;

        pub fn mode() -> SlugMode {
            SlugMode::default()
        }
    }

    pub mod robots {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "robots.txt".into()
        }

        pub fn sitemap() -> String {
            "sitemap.xml".into()
        }
    }
}

// ============================================================================
// [nav] Section Defaults
// ============================================================================

pub mod nav {
    pub fn fallback_href() -> String {
        "/".into()
    }

    pub fn fallback_label() -> String {
        "".into()
    }
}
