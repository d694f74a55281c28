//! Output formatter trait

use whalley_application::{HealthReport, IntakePreview, RankingResult};
use whalley_domain::Question;

/// Trait for rendering command results
pub trait OutputFormatter {
    /// Format a ranked candidate list (region list or map panel)
    fn format_ranking(&self, result: &RankingResult) -> String;

    /// Format an intake preview
    fn format_preview(&self, preview: &IntakePreview) -> String;

    /// Format the questionnaire
    fn format_questionnaire(&self, questions: &[Question]) -> String;

    /// Format a health check report
    fn format_health(&self, report: &HealthReport) -> String;
}
