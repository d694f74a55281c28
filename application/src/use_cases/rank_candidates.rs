//! Rank Candidates use case
//!
//! Backs both the region list and the map recommendations panel.

use crate::ports::candidate_catalog::{CandidateCatalog, CandidateSet};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};
use whalley_domain::{FilterSpec, RegionCandidate, SortOption, rank};

/// Input for the RankCandidates use case
#[derive(Debug, Clone, Default)]
pub struct RankCandidatesInput {
    pub set: CandidateSet,
    pub filter: FilterSpec,
    pub sort: SortOption,
    /// Keep at most this many results
    pub limit: Option<usize>,
}

impl RankCandidatesInput {
    pub fn new(set: CandidateSet) -> Self {
        Self {
            set,
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// Ranked candidates plus the size of the list they came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingResult {
    pub set: CandidateSet,
    pub sort: SortOption,
    /// Number of candidates before filtering
    pub total: usize,
    pub items: Vec<RegionCandidate>,
}

impl RankingResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Use case for filtering and sorting a candidate set
pub struct RankCandidatesUseCase<C: CandidateCatalog + 'static> {
    catalog: Arc<C>,
}

impl<C: CandidateCatalog + 'static> RankCandidatesUseCase<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self, input: RankCandidatesInput) -> RankingResult {
        let candidates = self.catalog.candidates(input.set);
        debug!(
            "Ranking {} {} with {:?}",
            candidates.len(),
            input.set,
            input.filter
        );

        let items = rank(&candidates, &input.filter, input.sort, input.limit);

        info!(
            "Ranked {}: {} of {} matched",
            input.set,
            items.len(),
            candidates.len()
        );

        RankingResult {
            set: input.set,
            sort: input.sort,
            total: candidates.len(),
            items,
        }
    }
}
