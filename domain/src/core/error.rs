//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised only when parsing user-supplied values into domain types.
/// The ranking pipeline itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid country code: {0} (expected two ASCII letters)")]
    InvalidCountryCode(String),

    #[error("Invalid sort option: {0} (expected score_desc or score_asc)")]
    InvalidSortOption(String),

    #[error("Invalid city type: {0} (expected metro or regional)")]
    InvalidCityType(String),

    #[error("Invalid location: {0} (expected anywhere, japan or australia)")]
    InvalidLocation(String),

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Invalid answer: {0} (expected <question>=<text>)")]
    InvalidAnswer(String),
}
