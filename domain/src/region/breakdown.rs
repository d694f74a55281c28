//! Score factors and per-factor breakdown

use crate::core::score::Score;
use serde::{Deserialize, Serialize};

/// A dimension a destination score is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    Job,
    Cost,
    Visa,
    Language,
}

impl Factor {
    pub const ALL: [Factor; 4] = [Factor::Job, Factor::Cost, Factor::Visa, Factor::Language];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Factor::Job => "Job",
            Factor::Cost => "Cost",
            Factor::Visa => "Visa",
            Factor::Language => "Language",
        }
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-factor scores backing a total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub job: Score,
    pub cost: Score,
    pub visa: Score,
    pub language: Score,
}

impl ScoreBreakdown {
    pub fn get(&self, factor: Factor) -> Score {
        match factor {
            Factor::Job => self.job,
            Factor::Cost => self.cost,
            Factor::Visa => self.visa,
            Factor::Language => self.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_factor() {
        let breakdown = ScoreBreakdown {
            job: Score::new(70),
            cost: Score::new(40),
            visa: Score::new(90),
            language: Score::new(55),
        };
        let values: Vec<u8> = Factor::ALL
            .iter()
            .map(|f| breakdown.get(*f).value())
            .collect();
        assert_eq!(values, vec![70, 40, 90, 55]);
    }

    #[test]
    fn test_factor_label() {
        assert_eq!(Factor::Language.to_string(), "Language");
    }
}
