//! Answers accumulated during the intake flow

use super::question::find_question;
use crate::core::error::DomainError;
use serde::{Serialize, Serializer};

/// Question id → free-text answer, in the order answers were first given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerMap {
    entries: Vec<(String, String)>,
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. Re-answering a question replaces the text but
    /// keeps its original position.
    pub fn insert(&mut self, question_id: impl Into<String>, answer: impl Into<String>) {
        let question_id = question_id.into();
        let answer = answer.into();
        match self.entries.iter_mut().find(|(id, _)| *id == question_id) {
            Some(entry) => entry.1 = answer,
            None => self.entries.push((question_id, answer)),
        }
    }

    pub fn with(mut self, question_id: impl Into<String>, answer: impl Into<String>) -> Self {
        self.insert(question_id, answer);
        self
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| id == question_id)
            .map(|(_, answer)| answer.as_str())
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.get(question_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, a)| (id.as_str(), a.as_str()))
    }

    /// All answers joined by a single space
    pub fn joined_text(&self) -> String {
        self.entries
            .iter()
            .map(|(_, answer)| answer.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Parse a `<question>=<text>` argument, checking the question exists
    pub fn parse_assignment(arg: &str) -> Result<(String, String), DomainError> {
        let (id, text) = arg
            .split_once('=')
            .ok_or_else(|| DomainError::InvalidAnswer(arg.to_string()))?;
        let id = id.trim();
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::InvalidAnswer(arg.to_string()));
        }
        if find_question(id).is_none() {
            return Err(DomainError::UnknownQuestion(id.to_string()));
        }
        Ok((id.to_string(), text.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = AnswerMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for AnswerMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
