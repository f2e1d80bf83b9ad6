//! Post store error types.
//!
//! Only failures of the store itself live here. A malformed date, an unknown
//! slug or an empty store are ordinary values, not errors.

use super::frontmatter::FrontmatterError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to walk content directory `{0}`")]
    Walk(PathBuf, #[source] walkdir::Error),

    #[error("invalid frontmatter in `{0}`")]
    Frontmatter(PathBuf, #[source] FrontmatterError),

    #[error("`{0}` has an empty slug after normalization")]
    EmptySlug(PathBuf),
}
