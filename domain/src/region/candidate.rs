//! Region candidate entity

use super::{breakdown::ScoreBreakdown, city_type::CityType, country_code::CountryCode};
use crate::core::score::Score;
use serde::{Deserialize, Serialize};

/// A region (or whole country) eligible for display or ranking
///
/// Candidates are immutable seed records. Ranking never mutates a
/// candidate in place; score adjustment produces copies via
/// [`RegionCandidate::with_score`].
///
/// # Example
///
/// ```
/// use whalley_domain::{CountryCode, RegionCandidate};
///
/// let tokyo = RegionCandidate::new("jp-tokyo", "Tokyo", "Japan", CountryCode::JP, 82)
///     .with_tags(["추천", "도시"]);
/// assert!(tokyo.has_tag("도시"));
/// assert_eq!(tokyo.score.value(), 82);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCandidate {
    /// Stable identifier (e.g., "jp-tokyo")
    pub id: String,
    /// Region display name (e.g., "Tokyo")
    pub region_name: String,
    /// Country display name (e.g., "Japan")
    pub country_name: String,
    pub country_code: CountryCode,
    pub score: Score,
    /// Free-form tags (e.g., "추천", "도시")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// One-line explanation shown next to the score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_type: Option<CityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl RegionCandidate {
    /// Create a new candidate with no tags, reason or city type
    pub fn new(
        id: impl Into<String>,
        region_name: impl Into<String>,
        country_name: impl Into<String>,
        country_code: CountryCode,
        score: impl Into<Score>,
    ) -> Self {
        Self {
            id: id.into(),
            region_name: region_name.into(),
            country_name: country_name.into(),
            country_code,
            score: score.into(),
            tags: Vec::new(),
            reason: None,
            city_type: None,
            breakdown: None,
        }
    }

    /// Create a country-level candidate (region name equals country name)
    pub fn country(
        id: impl Into<String>,
        country_name: impl Into<String>,
        country_code: CountryCode,
        score: impl Into<Score>,
    ) -> Self {
        let name = country_name.into();
        Self::new(id, name.clone(), name, country_code, score)
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_city_type(mut self, city_type: CityType) -> Self {
        self.city_type = Some(city_type);
        self
    }

    pub fn with_breakdown(mut self, breakdown: ScoreBreakdown) -> Self {
        self.breakdown = Some(breakdown);
        self
    }

    /// Copy of this candidate carrying a different score
    pub fn with_score(&self, score: Score) -> Self {
        Self {
            score,
            ..self.clone()
        }
    }

    /// Check for an exact tag match
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether this is a country-level entry rather than a region
    pub fn is_country_level(&self) -> bool {
        self.region_name == self.country_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let sydney = RegionCandidate::new("au-sydney", "Sydney", "Australia", CountryCode::AU, 74)
            .with_tags(["추천", "영어초보OK"])
            .with_reason("영어 환경 좋지만 비용 리스크 있음")
            .with_city_type(CityType::Metro);

        assert_eq!(sydney.tags.len(), 2);
        assert!(sydney.has_tag("영어초보OK"));
        assert!(!sydney.has_tag("영어"));
        assert_eq!(sydney.city_type, Some(CityType::Metro));
        assert!(!sydney.is_country_level());
    }

    #[test]
    fn test_country_level() {
        let canada = RegionCandidate::country("ca", "Canada", CountryCode::CA, 74);
        assert!(canada.is_country_level());
        assert_eq!(canada.region_name, "Canada");
    }

    #[test]
    fn test_with_score_leaves_original() {
        let osaka = RegionCandidate::new("jp-osaka", "Osaka", "Japan", CountryCode::JP, 61);
        let bumped = osaka.with_score(Score::new(64));
        assert_eq!(osaka.score.value(), 61);
        assert_eq!(bumped.score.value(), 64);
        assert_eq!(bumped.id, osaka.id);
    }

    #[test]
    fn test_json_skips_empty_optionals() {
        let c = RegionCandidate::country("nz", "New Zealand", CountryCode::NZ, 71);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["country_code"], "NZ");
        assert_eq!(json["score"], 71);
        assert!(json.get("tags").is_none());
        assert!(json.get("reason").is_none());
    }
}
