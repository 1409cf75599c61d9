//! Priority-match ranking for lookup suggestions
//!
//! Candidates are kept only when their label contains the query
//! (case-insensitive) and are then ordered by:
//! 1. exact match
//! 2. prefix match
//! 3. match starting within the first four characters
//! 4. earlier match position
//! 5. label, alphabetically

use std::cmp::Ordering;

/// Matches starting at or before this character index share one tier.
const NEAR_START_INDEX: usize = 3;

struct RankKey {
    label: String,
    position: usize,
}

impl RankKey {
    fn new(label: String, query: &str) -> Option<Self> {
        let byte_pos = label.find(query)?;
        let position = label[..byte_pos].chars().count();
        Some(Self { label, position })
    }

    fn compare(&self, other: &Self, query: &str) -> Ordering {
        let exact_a = self.label == query;
        let exact_b = other.label == query;
        if exact_a != exact_b {
            return exact_b.cmp(&exact_a);
        }

        let prefix_a = self.position == 0;
        let prefix_b = other.position == 0;
        if prefix_a != prefix_b {
            return prefix_b.cmp(&prefix_a);
        }

        let near_a = self.position <= NEAR_START_INDEX;
        let near_b = other.position <= NEAR_START_INDEX;
        if near_a != near_b {
            return near_b.cmp(&near_a);
        }

        self.position
            .cmp(&other.position)
            .then_with(|| self.label.cmp(&other.label))
    }
}

/// Filter `candidates` by `query` and order them by match quality.
///
/// An empty query returns every candidate in its original order.
/// The input slice is never modified.
pub fn priority_filter<T, F>(candidates: &[T], query: &str, label_of: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    if query.is_empty() {
        return candidates.to_vec();
    }
    let needle = query.to_uppercase();

    let mut ranked: Vec<(RankKey, &T)> = candidates
        .iter()
        .filter_map(|item| {
            RankKey::new(label_of(item).to_uppercase(), &needle).map(|key| (key, item))
        })
        .collect();

    // sort_by is stable, so fully tied labels keep their input order
    ranked.sort_by(|(a, _), (b, _)| a.compare(b, &needle));
    ranked.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Convenience wrapper for plain string lists (master data).
pub fn priority_filter_str<S>(candidates: &[S], query: &str) -> Vec<S>
where
    S: AsRef<str> + Clone,
{
    priority_filter(candidates, query, |s| s.as_ref().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Unit {
        code: &'static str,
    }

    #[test]
    fn test_empty_query_is_identity() {
        let list = vec!["USD", "AUD", "AED"];
        assert_eq!(priority_filter_str(&list, ""), list);
    }

    #[test]
    fn test_drops_non_matching() {
        let list = vec!["USD", "AUD", "AED"];
        assert_eq!(priority_filter_str(&list, "AU"), vec!["AUD"]);
    }

    #[test]
    fn test_exact_then_prefix_then_near_start() {
        let list = vec![Unit { code: "KGS" }, Unit { code: "KG" }, Unit { code: "PKG" }];
        let ranked = priority_filter(&list, "KG", |u| u.code.to_string());
        let codes: Vec<&str> = ranked.iter().map(|u| u.code).collect();
        assert_eq!(codes, vec!["KG", "KGS", "PKG"]);
    }

    #[test]
    fn test_case_insensitive_exact_match_wins() {
        let list = vec!["india gate", "India", "INDIAN OCEAN"];
        let ranked = priority_filter_str(&list, "india");
        assert_eq!(ranked[0], "India");
    }

    #[test]
    fn test_near_start_beats_far_match() {
        let list = vec!["XXXXXXXXAB", "XXAB", "ABX"];
        assert_eq!(
            priority_filter_str(&list, "ab"),
            vec!["ABX", "XXAB", "XXXXXXXXAB"]
        );
    }

    #[test]
    fn test_position_then_alphabetical() {
        let list = vec!["ZZZZZ-PORT", "YYYYYY-PORT", "AAAAA-PORT"];
        assert_eq!(
            priority_filter_str(&list, "port"),
            vec!["AAAAA-PORT", "ZZZZZ-PORT", "YYYYYY-PORT"]
        );
    }

    #[test]
    fn test_every_result_contains_query() {
        let list = vec!["MUNDRA", "NHAVA SHEVA", "CHENNAI", "KANDLA", "MUMBAI"];
        for query in ["mu", "A", "nna", "xyz"] {
            let ranked = priority_filter_str(&list, query);
            let upper = query.to_uppercase();
            assert!(ranked.iter().all(|s| s.to_uppercase().contains(&upper)));
            let expected = list.iter().filter(|s| s.contains(&upper)).count();
            assert_eq!(ranked.len(), expected);
        }
    }

    #[test]
    fn test_ranking_is_repeatable_and_pure() {
        let list = vec!["CBM", "CBI", "BOX", "BAG", "CCM"];
        let snapshot = list.clone();
        let first = priority_filter_str(&list, "b");
        let second = priority_filter_str(&list, "b");
        assert_eq!(first, second);
        assert_eq!(list, snapshot);
    }
}
