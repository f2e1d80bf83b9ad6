//! Category listing and filtering.

use super::{order::OrderedPosts, types::Post};
use serde::Serialize;
use std::collections::HashMap;

/// A category label with the number of posts carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary<'a> {
    pub name: &'a str,
    pub count: usize,
}

/// Distinct categories in order of first appearance in the sequence.
///
/// Posts with an empty category are not counted.
pub fn categories<'a>(sequence: &OrderedPosts<'a>) -> Vec<CategorySummary<'a>> {
    let mut summaries: Vec<CategorySummary<'a>> = Vec::new();
    let mut slots: HashMap<&'a str, usize> = HashMap::new();

    for post in sequence.iter() {
        let name = post.category.as_str();
        if name.is_empty() {
            continue;
        }
        match slots.get(name) {
            Some(&slot) => summaries[slot].count += 1,
            None => {
                slots.insert(name, summaries.len());
                summaries.push(CategorySummary { name, count: 1 });
            }
        }
    }

    summaries
}

/// Posts in sequence order, restricted to `category` when given.
pub fn filter_by_category<'a>(sequence: &OrderedPosts<'a>, category: Option<&str>) -> Vec<&'a Post> {
    sequence
        .iter()
        .filter(|post| category.is_none_or(|c| post.category == c))
        .collect()
}
