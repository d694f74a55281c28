//! ISO 3166-1 alpha-2 style country code

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Two-letter upper-case country code (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    pub const AU: CountryCode = CountryCode(*b"AU");
    pub const CA: CountryCode = CountryCode(*b"CA");
    pub const DE: CountryCode = CountryCode(*b"DE");
    pub const JP: CountryCode = CountryCode(*b"JP");
    pub const NZ: CountryCode = CountryCode(*b"NZ");

    /// Parse a code, accepting either case
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        match trimmed.as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => Err(DomainError::InvalidCountryCode(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        // Only ever built from ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl FromStr for CountryCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.as_str().to_string()
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercases() {
        assert_eq!(CountryCode::parse("jp").unwrap(), CountryCode::JP);
        assert_eq!(CountryCode::parse(" Au ").unwrap(), CountryCode::AU);
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        assert!(CountryCode::parse("J").is_err());
        assert!(CountryCode::parse("JPN").is_err());
        assert!(CountryCode::parse("J1").is_err());
        assert!(CountryCode::parse("일본").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        assert_eq!(serde_json::to_string(&CountryCode::NZ).unwrap(), "\"NZ\"");
        let code: CountryCode = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(code, CountryCode::DE);
        assert!(serde_json::from_str::<CountryCode>("\"xyz\"").is_err());
    }
}
