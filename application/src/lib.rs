//! Application layer for whalley-score
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    api_gateway::{ApiGateway, GatewayError, HealthStatus},
    candidate_catalog::{CandidateCatalog, CandidateSet},
};
pub use use_cases::check_health::{CheckHealthError, CheckHealthUseCase, HealthReport, HealthTarget};
pub use use_cases::preview_intake::{IntakePreview, PreviewIntakeInput, PreviewIntakeUseCase};
pub use use_cases::rank_candidates::{RankCandidatesInput, RankCandidatesUseCase, RankingResult};
