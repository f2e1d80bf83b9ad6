//! Previous/next resolution for a post within the ordered sequence.
//!
//! "Previous" is the post one position earlier in the newest-first
//! sequence (newer), "next" is one position later (older).
//!
//! # Boundaries
//!
//! | position        | previous | next   | is_first | is_last | label   |
//! |-----------------|----------|--------|----------|---------|---------|
//! | `0`             | absent   | `[1]`  | true     | total=1 | `1/n`   |
//! | `total - 1`     | `[n-2]`  | absent | total=1  | true    | `n/n`   |
//! | `NotFound`      | absent   | absent | false    | false   | absent  |
//! | any, total = 0  | absent   | absent | false    | false   | absent  |
//!
//! The resolver reports absence and nothing else. Choosing a fallback link
//! for an absent neighbor is the presenter's job.

use super::{order::OrderedPosts, types::Post};
use serde::Serialize;
use std::fmt;

/// Raw integer used for [`Position::NotFound`].
pub const NOT_FOUND_SENTINEL: i64 = -1;

/// Where the current post sits in the ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Zero-based index.
    Found(usize),
    /// The current post is not in the sequence.
    NotFound,
}

impl Position {
    /// Interpret a raw integer position; any negative value means not found.
    pub fn from_raw(raw: i64) -> Self {
        usize::try_from(raw).map_or(Self::NotFound, Self::Found)
    }

    /// Raw integer form, using [`NOT_FOUND_SENTINEL`] for `NotFound`.
    pub fn to_raw(self) -> i64 {
        match self {
            Self::Found(index) => i64::try_from(index).unwrap_or(i64::MAX),
            Self::NotFound => NOT_FOUND_SENTINEL,
        }
    }

    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::NotFound => None,
        }
    }
}

impl From<Option<usize>> for Position {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Self::NotFound, Self::Found)
    }
}

/// One-based display position, shown as `current/total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLabel {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}

/// Navigation facts for one post page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationResult<'a> {
    /// `NotFound` whenever the requested position was not a valid index.
    pub position: Position,
    pub total: usize,
    pub previous: Option<&'a Post>,
    pub next: Option<&'a Post>,
    pub is_first: bool,
    pub is_last: bool,
    pub page_label: Option<PageLabel>,
}

impl PaginationResult<'_> {
    fn not_found(total: usize) -> Self {
        Self {
            position: Position::NotFound,
            total,
            previous: None,
            next: None,
            is_first: false,
            is_last: false,
            page_label: None,
        }
    }

    pub const fn is_found(&self) -> bool {
        matches!(self.position, Position::Found(_))
    }
}

/// Resolve the neighbors of `position` in `sequence`.
///
/// A `Found` index at or past the end of the sequence resolves exactly like
/// `NotFound`.
pub fn resolve<'a>(sequence: &OrderedPosts<'a>, position: Position) -> PaginationResult<'a> {
    let total = sequence.len();
    let Some(current) = position.index().filter(|&index| index < total) else {
        return PaginationResult::not_found(total);
    };

    PaginationResult {
        position: Position::Found(current),
        total,
        previous: current.checked_sub(1).and_then(|index| sequence.get(index)),
        next: sequence.get(current + 1),
        is_first: current == 0,
        is_last: current + 1 == total,
        page_label: Some(PageLabel {
            current: current + 1,
            total,
        }),
    }
}

impl<'a> OrderedPosts<'a> {
    /// Locate `slug` and resolve its neighbors in one step.
    pub fn resolve_slug(&self, slug: &str) -> PaginationResult<'a> {
        resolve(self, self.position_of(slug))
    }
}
