//! Errors raised while loading or checking `quire.toml`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid quire.toml: {0}")]
    Toml(#[from] toml::de::Error),

    /// A value that parses but cannot be used, keyed by its TOML path.
    #[error("invalid `[{key}]`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    pub(super) fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}
