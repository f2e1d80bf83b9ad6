//! Newest-first ordering of posts.
//!
//! [`order`] never touches the posts it is given. The result is a view: the
//! original slice plus a permutation of indices into it.
//!
//! Posts sort by their parsed publish instant, descending. Posts sharing an
//! instant keep their input order. Posts without a parseable date sort after
//! every dated post, in input order among themselves.

use super::{pagination::Position, types::Post};
use std::borrow::Cow;

/// Read-only newest-first view over a slice of posts.
#[derive(Debug, Clone)]
pub struct OrderedPosts<'a> {
    posts: &'a [Post],
    indices: Cow<'a, [usize]>,
}

/// Order posts newest first.
pub fn order(posts: &[Post]) -> OrderedPosts<'_> {
    OrderedPosts {
        posts,
        indices: Cow::Owned(order_indices(posts)),
    }
}

/// The permutation behind [`order`].
///
/// `sort_by` is stable, which is what keeps equal dates in input order.
/// `None` compares below every `Some`, so reversing the comparison puts
/// undated posts last.
pub(crate) fn order_indices(posts: &[Post]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..posts.len()).collect();
    indices.sort_by(|&a, &b| posts[b].published.cmp(&posts[a].published));
    indices
}

impl<'a> OrderedPosts<'a> {
    /// View over a permutation computed elsewhere (the store's memoized order).
    pub(crate) fn from_indices(posts: &'a [Post], indices: &'a [usize]) -> Self {
        Self {
            posts,
            indices: Cow::Borrowed(indices),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Post at a zero-based position in the ordered sequence.
    pub fn get(&self, position: usize) -> Option<&'a Post> {
        let posts = self.posts;
        self.indices.get(position).map(|&index| &posts[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Post> + '_ {
        let posts = self.posts;
        self.indices.iter().map(move |&index| &posts[index])
    }

    /// Position of the first post with this slug, or [`Position::NotFound`].
    pub fn position_of(&self, slug: &str) -> Position {
        self.iter().position(|post| post.slug == slug).into()
    }
}
