//! Intake session state
//!
//! The session is a plain value. Every update takes `&self` and returns
//! the next state, so callers decide when (and whether) to replace the
//! state they hold.

use super::answers::AnswerMap;
use super::question::{QUESTIONNAIRE, Question, find_question};
use serde::Serialize;
use std::collections::BTreeMap;

/// Where the user is in the questionnaire and what they have answered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntakeSession {
    step: usize,
    answers: AnswerMap,
    input: String,
    /// Question id → selected quick option ids, in selection order
    selected_quick: BTreeMap<String, Vec<String>>,
}

impl IntakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn current_question(&self) -> &'static Question {
        &QUESTIONNAIRE[self.step.min(QUESTIONNAIRE.len() - 1)]
    }

    /// Selected quick option ids for a question
    pub fn selected_quick(&self, question_id: &str) -> &[String] {
        self.selected_quick
            .get(question_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Labels of the current question's selected quick options, comma-joined
    pub fn quick_text(&self) -> String {
        let question = self.current_question();
        self.selected_quick(question.id)
            .iter()
            .filter_map(|id| question.quick_option(id))
            .map(|opt| opt.label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty() || !self.quick_text().is_empty()
    }

    pub fn is_complete(&self) -> bool {
        QUESTIONNAIRE.iter().all(|q| self.answers.contains(q.id))
    }

    /// `round((step + 1) / questions * 100)`
    pub fn progress_percent(&self) -> u8 {
        let total = QUESTIONNAIRE.len() as f64;
        (((self.step + 1) as f64 / total) * 100.0).round() as u8
    }

    /// Toggle a quick option. Unknown question or option ids are ignored.
    pub fn toggle_quick(&self, question_id: &str, option_id: &str) -> Self {
        let valid = find_question(question_id).and_then(|q| q.quick_option(option_id));
        if valid.is_none() {
            return self.clone();
        }

        let mut next = self.clone();
        let selected = next
            .selected_quick
            .entry(question_id.to_string())
            .or_default();
        if let Some(pos) = selected.iter().position(|id| id == option_id) {
            selected.remove(pos);
        } else {
            selected.push(option_id.to_string());
        }
        next
    }

    pub fn set_input(&self, text: impl Into<String>) -> Self {
        Self {
            input: text.into(),
            ..self.clone()
        }
    }

    /// Record the current answer and advance.
    ///
    /// The answer is `"<quick labels> / <typed text>"` with empty parts
    /// dropped. Nothing happens when both parts are empty.
    pub fn submit(&self) -> Self {
        let quick = self.quick_text();
        let typed = self.input.trim();
        let answer = [quick.as_str(), typed]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" / ");

        if answer.is_empty() {
            return self.clone();
        }

        let mut next = self.clone();
        next.answers.insert(self.current_question().id, answer);
        next.input.clear();
        next.step = Self::clamp_step(self.step + 1);
        next
    }

    pub fn go_to_step(&self, step: usize) -> Self {
        Self {
            step: Self::clamp_step(step),
            ..self.clone()
        }
    }

    pub fn reset(&self) -> Self {
        Self::new()
    }

    fn clamp_step(step: usize) -> usize {
        step.min(QUESTIONNAIRE.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = IntakeSession::new();
        assert_eq!(session.step(), 0);
        assert_eq!(session.current_question().id, "goal");
        assert!(!session.can_submit());
        assert_eq!(session.progress_percent(), 20);
    }

    #[test]
    fn test_submit_typed_only() {
        let session = IntakeSession::new().set_input("  돈이 중요해  ");
        let next = session.submit();

        assert_eq!(next.answers().get("goal"), Some("돈이 중요해"));
        assert_eq!(next.input(), "");
        assert_eq!(next.step(), 1);
        // The previous state is untouched.
        assert_eq!(session.step(), 0);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_submit_quick_and_typed() {
        let next = IntakeSession::new()
            .toggle_quick("goal", "money")
            .toggle_quick("goal", "english")
            .set_input("외진 곳은 싫어")
            .submit();

        assert_eq!(
            next.answers().get("goal"),
            Some("돈을 많이 벌고 싶어, 영어 실력을 늘리고 싶어 / 외진 곳은 싫어")
        );
    }

    #[test]
    fn test_toggle_quick_twice_deselects() {
        let session = IntakeSession::new()
            .toggle_quick("goal", "money")
            .toggle_quick("goal", "money");
        assert!(session.selected_quick("goal").is_empty());
        assert!(!session.can_submit());
    }

    #[test]
    fn test_toggle_unknown_is_ignored() {
        let session = IntakeSession::new();
        assert_eq!(session.toggle_quick("goal", "yacht"), session);
        assert_eq!(session.toggle_quick("pets", "cat"), session);
    }

    #[test]
    fn test_quick_text_only_for_current_question() {
        let session = IntakeSession::new().toggle_quick("english", "beginner");
        assert_eq!(session.quick_text(), "");
        assert_eq!(session.go_to_step(1).quick_text(), "완전 초보");
    }

    #[test]
    fn test_empty_submit_is_noop() {
        let session = IntakeSession::new().set_input("   ");
        assert_eq!(session.submit(), session);
    }

    #[test]
    fn test_step_clamped_at_last_question() {
        let mut session = IntakeSession::new();
        for q in QUESTIONNAIRE {
            session = session.set_input(format!("answer for {}", q.id)).submit();
        }
        assert_eq!(session.step(), QUESTIONNAIRE.len() - 1);
        assert!(session.is_complete());
        assert_eq!(session.progress_percent(), 100);
    }

    #[test]
    fn test_go_to_step_clamps() {
        let session = IntakeSession::new().go_to_step(42);
        assert_eq!(session.step(), QUESTIONNAIRE.len() - 1);
        assert_eq!(session.current_question().id, "work");
    }

    #[test]
    fn test_resubmit_replaces_answer() {
        let session = IntakeSession::new()
            .set_input("first")
            .submit()
            .go_to_step(0)
            .set_input("second")
            .submit();
        assert_eq!(session.answers().get("goal"), Some("second"));
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn test_reset() {
        let session = IntakeSession::new()
            .toggle_quick("goal", "fun")
            .set_input("x")
            .submit()
            .reset();
        assert_eq!(session, IntakeSession::new());
    }
}
