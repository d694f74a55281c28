//! Filter predicate over region candidates
//!
//! A [`FilterSpec`] combines several independent dimensions. A candidate
//! passes when every dimension accepts it; an empty dimension accepts
//! everything. Bounds are clamped rather than rejected, so filtering can
//! never fail.

use crate::core::score::Score;
use crate::region::{candidate::RegionCandidate, city_type::CityType, country_code::CountryCode};
use serde::{Deserialize, Serialize};

/// Inclusive score range, both ends clamped to `0..=100`
///
/// An inverted range (`min > max`) is kept as given and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: Score,
    pub max: Score,
}

impl ScoreRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min: Score::new(min),
            max: Score::new(max),
        }
    }

    pub fn contains(&self, score: Score) -> bool {
        score >= self.min && score <= self.max
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self {
            min: Score::MIN,
            max: Score::MAX,
        }
    }
}

/// The combined score, country, tag, city type and text constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub score_range: ScoreRange,
    /// Accepted countries (empty = all)
    pub country_codes: Vec<CountryCode>,
    /// Tags a candidate must carry, all of them (empty = no requirement)
    pub required_tags: Vec<String>,
    /// Accepted city types (empty = all)
    pub city_types: Vec<CityType>,
    /// Case-insensitive substring query (blank = no requirement)
    pub query: String,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_score(mut self, min: i64) -> Self {
        self.score_range.min = Score::new(min);
        self
    }

    pub fn with_max_score(mut self, max: i64) -> Self {
        self.score_range.max = Score::new(max);
        self
    }

    pub fn with_score_range(mut self, range: ScoreRange) -> Self {
        self.score_range = range;
        self
    }

    pub fn with_country_codes(mut self, codes: impl IntoIterator<Item = CountryCode>) -> Self {
        self.country_codes = codes.into_iter().collect();
        self
    }

    pub fn with_required_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_city_types(mut self, types: impl IntoIterator<Item = CityType>) -> Self {
        self.city_types = types.into_iter().collect();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Whether this filter accepts every candidate
    pub fn is_unconstrained(&self) -> bool {
        self.score_range == ScoreRange::default()
            && self.country_codes.is_empty()
            && self.required_tags.is_empty()
            && self.city_types.is_empty()
            && self.query.trim().is_empty()
    }

    /// Check a single candidate against every dimension
    pub fn matches(&self, candidate: &RegionCandidate) -> bool {
        self.score_range.contains(candidate.score)
            && self.country_ok(candidate)
            && self.tags_ok(candidate)
            && self.city_type_ok(candidate)
            && self.query_ok(candidate)
    }

    fn country_ok(&self, candidate: &RegionCandidate) -> bool {
        self.country_codes.is_empty() || self.country_codes.contains(&candidate.country_code)
    }

    fn tags_ok(&self, candidate: &RegionCandidate) -> bool {
        self.required_tags.iter().all(|tag| candidate.has_tag(tag))
    }

    fn city_type_ok(&self, candidate: &RegionCandidate) -> bool {
        if self.city_types.is_empty() {
            return true;
        }
        candidate
            .city_type
            .is_some_and(|ct| self.city_types.contains(&ct))
    }

    fn query_ok(&self, candidate: &RegionCandidate) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        candidate.region_name.to_lowercase().contains(&query)
            || candidate.country_name.to_lowercase().contains(&query)
            || candidate.tags.join(" ").to_lowercase().contains(&query)
    }
}

/// Keep the candidates accepted by `spec`, preserving input order
pub fn filter_candidates(candidates: &[RegionCandidate], spec: &FilterSpec) -> Vec<RegionCandidate> {
    candidates
        .iter()
        .filter(|c| spec.matches(c))
        .cloned()
        .collect()
}
