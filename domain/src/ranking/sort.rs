//! Score ordering for candidate lists

use crate::core::error::DomainError;
use crate::region::candidate::RegionCandidate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a candidate list is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Highest score first (default)
    #[default]
    #[serde(alias = "desc")]
    ScoreDesc,
    /// Lowest score first
    #[serde(alias = "asc")]
    ScoreAsc,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::ScoreDesc => "score_desc",
            SortOption::ScoreAsc => "score_asc",
        }
    }
}

impl FromStr for SortOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score_desc" | "desc" => Ok(SortOption::ScoreDesc),
            "score_asc" | "asc" => Ok(SortOption::ScoreAsc),
            _ => Err(DomainError::InvalidSortOption(s.to_string())),
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order candidates by score.
///
/// `Vec::sort_by` is a stable merge sort, so equal scores keep their
/// input order in both directions.
pub fn sort_candidates(mut candidates: Vec<RegionCandidate>, sort: SortOption) -> Vec<RegionCandidate> {
    match sort {
        SortOption::ScoreDesc => candidates.sort_by(|a, b| b.score.cmp(&a.score)),
        SortOption::ScoreAsc => candidates.sort_by(|a, b| a.score.cmp(&b.score)),
    }
    candidates
}
