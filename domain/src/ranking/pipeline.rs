//! The shared filter → sort → (adjust) → top-N pipeline
//!
//! Every view (region list, map recommendations, intake preview) ranks
//! through these two functions so their behavior cannot drift apart.

use super::adjust::ScoreAdjustment;
use super::filter::{FilterSpec, filter_candidates};
use super::sort::{SortOption, sort_candidates};
use crate::region::candidate::RegionCandidate;
use serde::Serialize;

/// Number of candidates the intake preview shows
pub const DEFAULT_PREVIEW_LIMIT: usize = 3;

/// Filter, sort and optionally truncate a candidate list
pub fn rank(
    candidates: &[RegionCandidate],
    filter: &FilterSpec,
    sort: SortOption,
    limit: Option<usize>,
) -> Vec<RegionCandidate> {
    let mut ranked = sort_candidates(filter_candidates(candidates, filter), sort);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

/// Adjusted top-N candidates for a set of intake answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub adjustment: ScoreAdjustment,
    pub items: Vec<RegionCandidate>,
}

/// Apply the keyword adjustment for `answer_text`, re-sort descending and
/// keep the first `limit` candidates
pub fn preview(candidates: &[RegionCandidate], answer_text: &str, limit: usize) -> Preview {
    let adjustment = ScoreAdjustment::from_text(answer_text);
    let mut items = sort_candidates(adjustment.apply(candidates), SortOption::ScoreDesc);
    items.truncate(limit);
    Preview { adjustment, items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::country_code::CountryCode;

    fn candidate(id: &str, score: i64) -> RegionCandidate {
        RegionCandidate::country(id, id.to_uppercase(), CountryCode::AU, score)
    }

    fn ids(items: &[RegionCandidate]) -> Vec<&str> {
        items.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_rank_min_score_desc_keeps_tie_order() {
        let input = vec![candidate("a", 80), candidate("b", 80), candidate("c", 60)];
        let filter = FilterSpec::new().with_min_score(70);
        let ranked = rank(&input, &filter, SortOption::ScoreDesc, None);
        assert_eq!(ids(&ranked), vec!["a", "b"]);
    }

    #[test]
    fn test_rank_limit() {
        let input = vec![candidate("a", 10), candidate("b", 30), candidate("c", 20)];
        let ranked = rank(&input, &FilterSpec::new(), SortOption::ScoreAsc, Some(2));
        assert_eq!(ids(&ranked), vec!["a", "c"]);
    }

    #[test]
    fn test_rank_limit_larger_than_input() {
        let input = vec![candidate("a", 10)];
        let ranked = rank(&input, &FilterSpec::new(), SortOption::ScoreDesc, Some(10));
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_preview_top_three_adjusted() {
        let input = vec![
            candidate("tokyo", 82),
            candidate("sydney", 74),
            candidate("melbourne", 68),
            candidate("osaka", 61),
        ];
        let result = preview(&input, "영어 그리고 돈", DEFAULT_PREVIEW_LIMIT);
        assert_eq!(result.adjustment.delta, 2);
        assert_eq!(ids(&result.items), vec!["tokyo", "sydney", "melbourne"]);
        let scores: Vec<u8> = result.items.iter().map(|c| c.score.value()).collect();
        assert_eq!(scores, vec![84, 76, 70]);
    }

    #[test]
    fn test_preview_clamps_at_hundred() {
        let input = vec![candidate("a", 99), candidate("b", 100)];
        let result = preview(&input, "영어 돈 도시", 3);
        assert_eq!(result.adjustment.delta, 3);
        // Both clamp to 100; the tie keeps input order.
        assert_eq!(ids(&result.items), vec!["a", "b"]);
        assert!(result.items.iter().all(|c| c.score.value() == 100));
    }
}
