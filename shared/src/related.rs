//! Related-article suggestions by shared tags, topped up at random.

use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CatalogEntry;

/// A catalog entry with its relevance to the current article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedArticle {
    /// The suggested article.
    pub entry: CatalogEntry,
    /// Number of distinct tags shared with the current article.
    pub score: usize,
    /// The shared tags, normalized, in the current article's tag order.
    pub shared_tags: Vec<String>,
}

impl RankedArticle {
    fn unscored(entry: CatalogEntry) -> Self {
        Self {
            entry,
            score: 0,
            shared_tags: Vec::new(),
        }
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Normalized, without blanks or repeats, first occurrence wins.
fn normalized_tags(tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .map(|t| normalize_tag(t))
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect()
}

/// Orders `catalog` by relevance to the article `current_id` tagged with
/// `current_tags` and returns at most `max_results` entries.
///
/// Entries sharing more tags come first; equal scores keep catalog order.
/// When fewer than `max_results` entries share a tag, a random sample of the
/// rest fills the list. With no current tags the whole list is random. The
/// current article itself is never included.
pub fn rank_related<R: Rng + ?Sized>(
    current_id: &str,
    current_tags: &[String],
    catalog: &[CatalogEntry],
    max_results: usize,
    rng: &mut R,
) -> Vec<RankedArticle> {
    let others = catalog.iter().filter(|entry| entry.id != current_id).cloned();
    let current = normalized_tags(current_tags);

    if current.is_empty() {
        let mut shuffled: Vec<RankedArticle> = others.map(RankedArticle::unscored).collect();
        shuffled.shuffle(rng);
        shuffled.truncate(max_results);
        debug!(current_id, count = shuffled.len(), "no tags, related list is random");
        return shuffled;
    }

    let mut scored: Vec<RankedArticle> = others
        .map(|entry| {
            let candidate: HashSet<String> = entry.tags.iter().map(|t| normalize_tag(t)).collect();
            let shared_tags: Vec<String> =
                current.iter().filter(|tag| candidate.contains(*tag)).cloned().collect();
            RankedArticle {
                score: shared_tags.len(),
                shared_tags,
                entry,
            }
        })
        .collect();
    // `sort_by` is stable: ties keep catalog order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let (mut related, mut rest): (Vec<_>, Vec<_>) =
        scored.into_iter().partition(|item| item.score > 0);
    if related.len() >= max_results {
        related.truncate(max_results);
        return related;
    }

    let matched = related.len();
    rest.shuffle(rng);
    rest.truncate(max_results - matched);
    related.extend(rest);
    debug!(current_id, matched, filled = related.len() - matched, "related articles ranked");
    related
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn entry(id: &str, tags: &[&str]) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            title: format!("article {id}"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            category: String::new(),
        }
    }

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    fn ids(ranked: &[RankedArticle]) -> Vec<&str> {
        ranked.iter().map(|r| r.entry.id.as_str()).collect()
    }

    #[test]
    fn orders_by_shared_tag_count() {
        let catalog = [entry("cur", &["a", "b"]), entry("1", &["a"]), entry("2", &["x"]), entry("3", &["a", "b"])];
        let mut rng = StdRng::seed_from_u64(7);
        let ranked = rank_related("cur", &tags(&["a", "b"]), &catalog, 9, &mut rng);
        assert_eq!(ids(&ranked), vec!["3", "1", "2"]);
        assert_eq!(ranked[0].score, 2);
        assert_eq!(ranked[0].shared_tags, tags(&["a", "b"]));
        assert_eq!(ranked[1].score, 1);
        assert_eq!(ranked[2].score, 0);
    }

    #[test]
    fn tags_match_case_and_whitespace_insensitively() {
        let catalog = [entry("1", &[" Rust ", "WASM"])];
        let mut rng = StdRng::seed_from_u64(1);
        let ranked = rank_related("cur", &tags(&["rust", "wasm", "rust"]), &catalog, 9, &mut rng);
        assert_eq!(ranked[0].score, 2);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = [entry("1", &["a"]), entry("2", &["a"]), entry("3", &["a"])];
        let mut rng = StdRng::seed_from_u64(3);
        let ranked = rank_related("cur", &tags(&["a"]), &catalog, 9, &mut rng);
        assert_eq!(ids(&ranked), vec!["1", "2", "3"]);
    }

    #[test]
    fn without_tags_returns_every_other_article() {
        let catalog: Vec<_> = (0..6).map(|i| entry(&i.to_string(), &["t"])).collect();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let ranked = rank_related("2", &[], &catalog, 9, &mut rng);
            let got: HashSet<&str> = ids(&ranked).into_iter().collect();
            let want: HashSet<&str> = ["0", "1", "3", "4", "5"].into_iter().collect();
            assert_eq!(got, want);
        }
    }

    #[test]
    fn no_overlap_still_fills_from_catalog() {
        let catalog = [entry("1", &["x"]), entry("2", &["y"]), entry("3", &[])];
        let mut rng = StdRng::seed_from_u64(11);
        let ranked = rank_related("cur", &tags(&["a"]), &catalog, 9, &mut rng);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|r| r.score == 0));
    }

    #[test]
    fn truncates_to_max_results() {
        let catalog: Vec<_> = (0..15)
            .map(|i| entry(&i.to_string(), if i % 2 == 0 { &["a"] } else { &["z"] }))
            .collect();
        let mut rng = StdRng::seed_from_u64(5);

        let ranked = rank_related("cur", &tags(&["a"]), &catalog, 9, &mut rng);
        assert_eq!(ranked.len(), 9);
        // 8 matching entries (0, 2, .., 14) come first, one random filler after.
        assert!(ranked[..8].iter().all(|r| r.score == 1));
        assert_eq!(ranked[8].score, 0);

        let ranked = rank_related("cur", &tags(&["a"]), &catalog, 4, &mut rng);
        assert_eq!(ids(&ranked), vec!["0", "2", "4", "6"]);
    }

    #[test]
    fn scores_never_increase_along_the_list() {
        let catalog = [
            entry("1", &["a"]),
            entry("2", &[]),
            entry("3", &["a", "b", "c"]),
            entry("4", &["b", "c"]),
            entry("5", &["q"]),
        ];
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let ranked = rank_related("cur", &tags(&["a", "b", "c"]), &catalog, 9, &mut rng);
            assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn empty_catalog_gives_empty_list() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(rank_related("1", &tags(&["a"]), &[], 9, &mut rng).is_empty());
        assert!(rank_related("1", &[], &[entry("1", &["a"])], 9, &mut rng).is_empty());
    }
}
