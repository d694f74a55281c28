//! City type value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Whether a region is a large metro area or a smaller regional town
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityType {
    Metro,
    Regional,
}

impl CityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CityType::Metro => "metro",
            CityType::Regional => "regional",
        }
    }
}

impl FromStr for CityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metro" => Ok(CityType::Metro),
            "regional" => Ok(CityType::Regional),
            _ => Err(DomainError::InvalidCityType(s.to_string())),
        }
    }
}

impl std::fmt::Display for CityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
