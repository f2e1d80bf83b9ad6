//! Quire: post ordering, pagination and navigation data for a markdown/mdx blog.
//!
//! # Modules
//!
//! | Module      | Purpose                                            |
//! |-------------|----------------------------------------------------|
//! | `config`    | `quire.toml` parsing and CLI overrides             |
//! | `post`      | Post store, ordering, pagination, categories       |
//! | `generator` | Navigation presenter, JSON data files, robots.txt  |
//! | `build`     | `quire build` orchestration                        |
//! | `query`     | `list`, `nav`, `categories`, `random`              |

pub mod build;
pub mod cli;
pub mod config;
pub mod generator;
pub mod init;
pub mod post;
pub mod query;
pub mod utils;
