//! Domain layer for whalley-score
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Region Ranking
//!
//! Every view ranks [`RegionCandidate`]s through one shared pipeline:
//!
//! - **Filter**: [`FilterSpec`] (score range, countries, tags, city types, query)
//! - **Sort**: [`SortOption`], stable for ties
//! - **Adjust** (intake preview only): [`ScoreAdjustment`] from answer keywords
//!
//! ## Intake
//!
//! - [`QUESTIONNAIRE`]: the fixed questions
//! - [`IntakeSession`]: step, draft and answers as an immutable value
//!
//! ## Browsing
//!
//! - [`ListViewState`]: list-page filters as an immutable value

pub mod browse;
pub mod config;
pub mod core;
pub mod intake;
pub mod ranking;
pub mod region;

// Re-export commonly used types
pub use browse::list_state::{ListViewState, Location};
pub use config::OutputFormat;
pub use core::{error::DomainError, score::Score};
pub use intake::{
    answers::AnswerMap,
    question::{QUESTIONNAIRE, Question, QuickOption, find_question},
    session::IntakeSession,
};
pub use ranking::{
    adjust::{KEYWORD_RULES, KeywordRule, MAX_DELTA, MIN_DELTA, ScoreAdjustment, score_delta},
    filter::{FilterSpec, ScoreRange, filter_candidates},
    pipeline::{DEFAULT_PREVIEW_LIMIT, Preview, preview, rank},
    sort::{SortOption, sort_candidates},
};
pub use region::{
    breakdown::{Factor, ScoreBreakdown},
    candidate::RegionCandidate,
    city_type::CityType,
    country_code::CountryCode,
};
