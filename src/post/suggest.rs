//! "More for you": one random post to read next.
//!
//! The pick is a pure function of a seed, so a build can derive the seed
//! from the current slug and produce the same suggestion every time, while
//! the CLI seeds from the clock.

use super::{order::OrderedPosts, types::Post};
use chrono::Utc;

/// Pick one post from `sequence`.
///
/// `exclude` is skipped whenever another candidate exists. Returns `None`
/// only for an empty sequence.
pub fn suggest<'a>(
    sequence: &OrderedPosts<'a>,
    seed: u64,
    exclude: Option<&str>,
) -> Option<&'a Post> {
    let mut candidates: Vec<&'a Post> = sequence
        .iter()
        .filter(|post| exclude != Some(post.slug.as_str()))
        .collect();
    if candidates.is_empty() {
        candidates = sequence.iter().collect();
    }
    if candidates.is_empty() {
        return None;
    }

    let index = mix(seed) % candidates.len() as u64;
    candidates.get(index as usize).copied()
}

/// Stable seed for a slug.
pub fn seed_from_slug(slug: &str) -> u64 {
    first_u64(blake3::hash(slug.as_bytes()).as_bytes())
}

/// Seed that changes on every call.
pub fn seed_from_clock() -> u64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64
}

/// Spread nearby seeds (consecutive timestamps) across the whole range.
fn mix(seed: u64) -> u64 {
    first_u64(blake3::hash(&seed.to_le_bytes()).as_bytes())
}

fn first_u64(bytes: &[u8; 32]) -> u64 {
    let mut head = [0u8; 8];
    head.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::order::order;
    use std::collections::HashSet;

    fn posts(n: usize) -> Vec<Post> {
        (0..n)
            .map(|i| Post::new(format!("p{i}"), "2024-01-01"))
            .collect()
    }

    #[test]
    fn test_suggest_empty_is_none() {
        let posts = posts(0);
        assert_eq!(suggest(&order(&posts), 42, None), None);
    }

    #[test]
    fn test_suggest_is_deterministic_per_seed() {
        let posts = posts(10);
        let seq = order(&posts);
        for seed in 0..50 {
            assert_eq!(suggest(&seq, seed, None), suggest(&seq, seed, None));
        }
    }

    #[test]
    fn test_suggest_never_returns_excluded_when_alternatives_exist() {
        let posts = posts(3);
        let seq = order(&posts);
        for seed in 0..200 {
            let pick = suggest(&seq, seed, Some("p1")).unwrap();
            assert_ne!(pick.slug, "p1");
        }
    }

    #[test]
    fn test_suggest_single_excluded_post_still_suggested() {
        let posts = posts(1);
        let seq = order(&posts);
        assert_eq!(
            suggest(&seq, 9, Some("p0")).map(|p| p.slug.as_str()),
            Some("p0")
        );
    }

    #[test]
    fn test_suggest_reaches_every_post() {
        let posts = posts(5);
        let seq = order(&posts);
        let picked: HashSet<_> = (0..500)
            .filter_map(|seed| suggest(&seq, seed, None))
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(picked.len(), 5);
    }

    #[test]
    fn test_seed_from_slug_is_stable() {
        assert_eq!(seed_from_slug("mind/hello"), seed_from_slug("mind/hello"));
        assert_ne!(seed_from_slug("mind/hello"), seed_from_slug("mind/bye"));
    }
}
