//! Posts: loading, ordering and navigation.
//!
//! # Data Flow
//!
//! ```text
//! content/**/*.mdx ──► PostStore::load() ──► PostStore (immutable)
//!                                                │
//!                                       ordered() (memoized)
//!                                                │
//!                                                ▼
//!                                   OrderedPosts (newest first)
//!                                                │
//!            ┌───────────────────┬───────────────┼───────────────────┐
//!            ▼                   ▼               ▼                   ▼
//!     position_of(slug)    categories()   filter_by_category()   suggest()
//!            │
//!            ▼
//!     resolve() ──► PaginationResult ──► presenter (generator::nav)
//! ```

pub mod category;
mod error;
mod frontmatter;
pub mod order;
pub mod pagination;
mod store;
pub mod suggest;
mod types;

pub use error::PostError;
pub use frontmatter::FrontmatterError;
pub use order::{OrderedPosts, order};
pub use pagination::{PageLabel, PaginationResult, Position, resolve};
pub use store::PostStore;
pub use types::Post;
