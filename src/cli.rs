//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quire: post ordering and navigation data for a markdown/mdx blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: quire.toml)
    #[arg(short = 'C', long, default_value = "quire.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Init a site with a content directory and default config
    Init {
        /// the name(path) of site directory, related to `root`
        name: Option<PathBuf>,
    },

    /// Write ordered post data, per-post navigation and robots.txt
    Build {
        /// Clean output directory completely before building
        #[arg(long)]
        clean: bool,
    },

    /// List posts newest first
    List {
        /// Only posts in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Show previous/next navigation for one post
    Nav {
        /// Post slug, e.g. `mind/hello`
        slug: String,
    },

    /// List categories with post counts
    Categories,

    /// Suggest a random post
    Random {
        /// Seed for a reproducible pick (default: current time)
        #[arg(long)]
        seed: Option<u64>,

        /// Never suggest this slug when another post exists
        #[arg(long)]
        exclude: Option<String>,
    },
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
