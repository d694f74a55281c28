//! Region list view state
//!
//! Holds everything the list view lets a user change and converts it into
//! a [`FilterSpec`]. Updates are pure: each returns a new state.

use crate::core::error::DomainError;
use crate::core::score::Score;
use crate::ranking::filter::{FilterSpec, ScoreRange};
use crate::ranking::sort::SortOption;
use crate::region::country_code::CountryCode;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Country shortcut offered next to the search box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    #[default]
    Anywhere,
    Japan,
    Australia,
}

impl Location {
    /// The single country this shortcut selects, if any
    pub fn country_code(&self) -> Option<CountryCode> {
        match self {
            Location::Anywhere => None,
            Location::Japan => Some(CountryCode::JP),
            Location::Australia => Some(CountryCode::AU),
        }
    }
}

impl FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anywhere" | "all" => Ok(Location::Anywhere),
            "japan" | "jp" => Ok(Location::Japan),
            "australia" | "au" => Ok(Location::Australia),
            _ => Err(DomainError::InvalidLocation(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListViewState {
    pub query: String,
    /// Tag chips; a candidate must carry every chip
    pub chips: Vec<String>,
    pub score_range: ScoreRange,
    pub country_codes: Vec<CountryCode>,
    pub location: Location,
    pub sort: SortOption,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            chips: Vec::new(),
            score_range: ScoreRange::default(),
            country_codes: Vec::new(),
            location: Location::Anywhere,
            sort: SortOption::ScoreDesc,
        }
    }
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    pub fn toggle_chip(&self, label: &str) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.chips.iter().position(|c| c == label) {
            next.chips.remove(pos);
        } else {
            next.chips.push(label.to_string());
        }
        next
    }

    pub fn remove_chip(&self, label: &str) -> Self {
        let mut next = self.clone();
        next.chips.retain(|c| c != label);
        next
    }

    pub fn clear_chips(&self) -> Self {
        Self {
            chips: Vec::new(),
            ..self.clone()
        }
    }

    pub fn toggle_country_code(&self, code: CountryCode) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.country_codes.iter().position(|c| *c == code) {
            next.country_codes.remove(pos);
        } else {
            next.country_codes.push(code);
        }
        next
    }

    /// Pick a location shortcut. It replaces the country selection.
    pub fn with_location(&self, location: Location) -> Self {
        Self {
            location,
            country_codes: location.country_code().into_iter().collect(),
            ..self.clone()
        }
    }

    pub fn with_min_score(&self, min: i64) -> Self {
        let mut next = self.clone();
        next.score_range.min = Score::new(min);
        next
    }

    pub fn with_max_score(&self, max: i64) -> Self {
        let mut next = self.clone();
        next.score_range.max = Score::new(max);
        next
    }

    pub fn with_sort(&self, sort: SortOption) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// Back to defaults: full range, all countries, no chips, no query
    pub fn clear(&self) -> Self {
        Self::default()
    }

    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec::new()
            .with_score_range(self.score_range)
            .with_country_codes(self.country_codes.iter().copied())
            .with_required_tags(self.chips.iter().cloned())
            .with_query(self.query.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_unconstrained() {
        let state = ListViewState::new();
        assert!(state.chips.is_empty());
        assert!(state.filter_spec().is_unconstrained());
        assert_eq!(state.sort, SortOption::ScoreDesc);
    }

    #[test]
    fn test_toggle_chip() {
        let state = ListViewState::new().toggle_chip("도시");
        assert_eq!(state.chips, vec!["도시"]);
        let state = state.toggle_chip("추천").toggle_chip("도시");
        assert_eq!(state.chips, vec!["추천"]);
    }

    #[test]
    fn test_remove_and_clear_chips() {
        let state = ListViewState::new().toggle_chip("a").toggle_chip("b");
        assert_eq!(state.remove_chip("a").chips, vec!["b"]);
        assert!(state.clear_chips().chips.is_empty());
    }

    #[test]
    fn test_toggle_country_code() {
        let state = ListViewState::new()
            .toggle_country_code(CountryCode::JP)
            .toggle_country_code(CountryCode::AU)
            .toggle_country_code(CountryCode::JP);
        assert_eq!(state.country_codes, vec![CountryCode::AU]);
    }

    #[test]
    fn test_location_replaces_codes() {
        let state = ListViewState::new()
            .toggle_country_code(CountryCode::NZ)
            .with_location(Location::Japan);
        assert_eq!(state.country_codes, vec![CountryCode::JP]);

        let state = state.with_location(Location::Anywhere);
        assert!(state.country_codes.is_empty());
    }

    #[test]
    fn test_score_bounds_clamped() {
        let state = ListViewState::new().with_min_score(-3).with_max_score(400);
        assert_eq!(state.score_range, ScoreRange::default());
    }

    #[test]
    fn test_filter_spec_reflects_state() {
        let spec = ListViewState::new()
            .with_query("syd")
            .toggle_chip("추천")
            .with_min_score(70)
            .with_location(Location::Australia)
            .filter_spec();
        assert_eq!(spec.query, "syd");
        assert_eq!(spec.required_tags, vec!["추천"]);
        assert_eq!(spec.score_range.min.value(), 70);
        assert_eq!(spec.country_codes, vec![CountryCode::AU]);
    }

    #[test]
    fn test_clear_resets_everything() {
        let state = ListViewState::new()
            .with_query("x")
            .with_sort(SortOption::ScoreAsc)
            .with_location(Location::Japan)
            .clear();
        assert_eq!(state, ListViewState::default());
    }

    #[test]
    fn test_location_from_str() {
        assert_eq!("Japan".parse::<Location>().unwrap(), Location::Japan);
        assert_eq!("au".parse::<Location>().unwrap(), Location::Australia);
        assert!("mars".parse::<Location>().is_err());
    }
}
