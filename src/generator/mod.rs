//! Output generators.
//!
//! - `nav`: presenter turning a pagination result into links
//! - `data`: JSON files for posts, categories and per-post navigation
//! - `robots`: robots.txt

pub mod data;
pub mod nav;
pub mod robots;
