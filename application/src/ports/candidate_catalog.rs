//! Candidate catalog port
//!
//! Source of the candidate lists the ranking use cases work on.

use serde::{Deserialize, Serialize};
use whalley_domain::RegionCandidate;

/// Which candidate list to rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateSet {
    /// City-level regions (list page, intake preview)
    #[default]
    Regions,
    /// Whole countries (map recommendations)
    Countries,
}

impl CandidateSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateSet::Regions => "regions",
            CandidateSet::Countries => "countries",
        }
    }
}

impl std::fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only access to candidate records
pub trait CandidateCatalog: Send + Sync {
    /// All candidates of a set, in seed order
    fn candidates(&self, set: CandidateSet) -> Vec<RegionCandidate>;
}
