//! Score value object

use serde::{Deserialize, Serialize};

/// A destination score in the inclusive range `0..=100` (Value Object)
///
/// Construction never fails: out-of-range inputs are clamped, so every
/// `Score` in the system is valid by construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(100);

    /// Create a score, clamping the value to `0..=100`
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    /// Get the raw value
    pub fn value(self) -> u8 {
        self.0
    }

    /// Add a signed delta, re-clamping the result
    pub fn adjusted(self, delta: i32) -> Self {
        Self::new(self.0 as i64 + delta as i64)
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Score::new(value)
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Score::new(value as i64)
    }
}

impl From<u8> for Score {
    fn from(value: u8) -> Self {
        Score::new(value as i64)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        assert_eq!(Score::new(-5).value(), 0);
        assert_eq!(Score::new(150).value(), 100);
        assert_eq!(Score::new(82).value(), 82);
    }

    #[test]
    fn test_adjusted_clamps_both_ends() {
        assert_eq!(Score::new(99).adjusted(3), Score::MAX);
        assert_eq!(Score::new(1).adjusted(-2), Score::MIN);
        assert_eq!(Score::new(82).adjusted(2).value(), 84);
    }

    #[test]
    fn test_deserialize_clamps() {
        let score: Score = serde_json::from_str("250").unwrap();
        assert_eq!(score, Score::MAX);

        let score: Score = serde_json::from_str("-1").unwrap();
        assert_eq!(score, Score::MIN);
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(serde_json::to_string(&Score::new(74)).unwrap(), "74");
    }
}
