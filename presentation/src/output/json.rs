//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use serde::Serialize;
use whalley_application::{HealthReport, IntakePreview, RankingResult};
use whalley_domain::Question;

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_ranking(&self, result: &RankingResult) -> String {
        Self::to_json(result)
    }

    fn format_preview(&self, preview: &IntakePreview) -> String {
        Self::to_json(preview)
    }

    fn format_questionnaire(&self, questions: &[Question]) -> String {
        Self::to_json(questions)
    }

    fn format_health(&self, report: &HealthReport) -> String {
        Self::to_json(report)
    }
}
