//! Preview Intake use case
//!
//! Turns intake answers into the adjusted top-N preview shown while the
//! questionnaire is being filled in.

use crate::ports::candidate_catalog::{CandidateCatalog, CandidateSet};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};
use whalley_domain::{AnswerMap, DEFAULT_PREVIEW_LIMIT, Preview, preview};

/// Input for the PreviewIntake use case
#[derive(Debug, Clone)]
pub struct PreviewIntakeInput {
    pub answers: AnswerMap,
    pub limit: usize,
}

impl PreviewIntakeInput {
    pub fn new(answers: AnswerMap) -> Self {
        Self {
            answers,
            limit: DEFAULT_PREVIEW_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// A preview together with the answers it was computed from
#[derive(Debug, Clone, Serialize)]
pub struct IntakePreview {
    pub answers: AnswerMap,
    #[serde(flatten)]
    pub preview: Preview,
    pub generated_at: DateTime<Utc>,
}

/// Use case for previewing region scores from intake answers
pub struct PreviewIntakeUseCase<C: CandidateCatalog + 'static> {
    catalog: Arc<C>,
}

impl<C: CandidateCatalog + 'static> PreviewIntakeUseCase<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self, input: PreviewIntakeInput) -> IntakePreview {
        let candidates = self.catalog.candidates(CandidateSet::Regions);
        let text = input.answers.joined_text();
        debug!("Previewing {} answers", input.answers.len());

        let preview = preview(&candidates, &text, input.limit);

        info!(
            "Preview delta {} (matched: {:?})",
            preview.adjustment.delta, preview.adjustment.matched
        );

        IntakePreview {
            answers: input.answers,
            preview,
            generated_at: Utc::now(),
        }
    }
}
