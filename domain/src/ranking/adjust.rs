//! Keyword-driven score adjustment for the intake preview
//!
//! This is a stand-in heuristic that nudges every candidate by the same
//! small delta depending on which keywords appear in the free-text
//! answers. It has no weighting or statistical basis.

use crate::region::candidate::RegionCandidate;
use serde::Serialize;

/// Lower bound for the summed delta
pub const MIN_DELTA: i32 = -2;
/// Upper bound for the summed delta
pub const MAX_DELTA: i32 = 3;

/// A keyword group contributing a fixed weight when any keyword is present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub weight: i32,
}

impl KeywordRule {
    /// `text` must already be lower-cased
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }
}

pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        name: "english",
        keywords: &["영어", "english"],
        weight: 1,
    },
    KeywordRule {
        name: "beginner",
        keywords: &["초보", "완전"],
        weight: -1,
    },
    KeywordRule {
        name: "money",
        keywords: &["돈", "벌"],
        weight: 1,
    },
    KeywordRule {
        name: "urban",
        keywords: &["대도시", "도시"],
        weight: 1,
    },
    KeywordRule {
        name: "regional",
        keywords: &["지역", "소도시"],
        weight: 1,
    },
];

/// Result of evaluating the keyword rules against answer text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ScoreAdjustment {
    /// Clamped delta in `MIN_DELTA..=MAX_DELTA`
    pub delta: i32,
    /// Names of the rules that fired, in rule order
    pub matched: Vec<&'static str>,
}

impl ScoreAdjustment {
    /// Evaluate the rules against free text (case-insensitive)
    pub fn from_text(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let fired: Vec<&KeywordRule> = KEYWORD_RULES
            .iter()
            .filter(|rule| rule.matches(&lowered))
            .collect();

        let raw: i32 = fired.iter().map(|rule| rule.weight).sum();

        Self {
            delta: raw.clamp(MIN_DELTA, MAX_DELTA),
            matched: fired.iter().map(|rule| rule.name).collect(),
        }
    }

    /// Apply the delta to every candidate, re-clamping each score
    pub fn apply(&self, candidates: &[RegionCandidate]) -> Vec<RegionCandidate> {
        candidates
            .iter()
            .map(|c| c.with_score(c.score.adjusted(self.delta)))
            .collect()
    }
}

/// Delta for a block of text
pub fn score_delta(text: &str) -> i32 {
    ScoreAdjustment::from_text(text).delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score::Score;
    use crate::region::country_code::CountryCode;

    #[test]
    fn test_empty_text_is_zero() {
        let adj = ScoreAdjustment::from_text("");
        assert_eq!(adj.delta, 0);
        assert!(adj.matched.is_empty());
    }

    #[test]
    fn test_english_and_money() {
        let adj = ScoreAdjustment::from_text("영어도 늘고 싶고 돈이 중요해");
        assert_eq!(adj.delta, 2);
        assert_eq!(adj.matched, vec!["english", "money"]);
        assert_eq!(Score::new(82).adjusted(adj.delta).value(), 84);
    }

    #[test]
    fn test_english_keyword_case_insensitive() {
        assert_eq!(score_delta("I want to improve my ENGLISH"), 1);
    }

    #[test]
    fn test_beginner_is_negative() {
        assert_eq!(score_delta("완전 초보"), -1);
    }

    #[test]
    fn test_small_town_fires_urban_and_regional() {
        // "소도시" contains "도시", so both preference rules fire.
        let adj = ScoreAdjustment::from_text("소도시");
        assert_eq!(adj.matched, vec!["urban", "regional"]);
        assert_eq!(adj.delta, 2);
    }

    #[test]
    fn test_delta_clamped_to_max() {
        let text = "영어 돈 대도시 지역";
        assert_eq!(score_delta(text), MAX_DELTA);
    }

    #[test]
    fn test_delta_always_in_range() {
        let samples = [
            "",
            "초보",
            "영어 english 돈 벌 도시 지역 소도시 대도시",
            "완전 초보인데 돈 벌고 싶어",
            "nothing relevant here",
        ];
        for text in samples {
            let delta = score_delta(text);
            assert!((MIN_DELTA..=MAX_DELTA).contains(&delta), "{text}: {delta}");
        }
    }

    #[test]
    fn test_apply_clamps_scores() {
        let candidates = vec![
            RegionCandidate::country("hi", "High", CountryCode::AU, 99),
            RegionCandidate::country("lo", "Low", CountryCode::JP, 1),
        ];
        let up = ScoreAdjustment { delta: 3, matched: vec![] }.apply(&candidates);
        assert_eq!(up[0].score, Score::MAX);
        let down = ScoreAdjustment { delta: -2, matched: vec![] }.apply(&candidates);
        assert_eq!(down[1].score, Score::MIN);
        assert_eq!(candidates[0].score.value(), 99);
    }
}
