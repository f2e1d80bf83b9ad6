//! Navigation presenter.
//!
//! Turns a [`PaginationResult`] into what a post page renders: a previous
//! link, a next link and an optional "3/12" indicator. This is the only
//! place a missing neighbor becomes the configured fallback link.

use crate::{
    config::NavConfig,
    post::{PaginationResult, Post},
    utils::slug::post_url,
};
use serde::Serialize;

/// One navigation affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    /// Tooltip text (the neighbor's subtitle).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Set when the link is the fallback rather than a neighbor.
    pub disabled: bool,
}

/// Everything a post page needs to draw its pagination widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavView {
    pub previous: NavLink,
    pub next: NavLink,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
}

impl NavView {
    pub fn present(result: &PaginationResult<'_>, nav: &NavConfig, path_prefix: &str) -> Self {
        Self {
            previous: NavLink::present(result.previous, nav, path_prefix),
            next: NavLink::present(result.next, nav, path_prefix),
            indicator: result.page_label.map(|label| label.to_string()),
        }
    }
}

impl NavLink {
    fn present(neighbor: Option<&Post>, nav: &NavConfig, path_prefix: &str) -> Self {
        match neighbor {
            Some(post) => Self {
                href: post_url(path_prefix, &post.slug),
                label: post.title.clone(),
                title: post.subtitle.clone(),
                disabled: false,
            },
            None => Self {
                href: nav.fallback_href.clone(),
                label: nav.fallback_label.clone(),
                title: String::new(),
                disabled: true,
            },
        }
    }
}
