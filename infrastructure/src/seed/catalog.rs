//! Built-in candidate records

use whalley_application::{CandidateCatalog, CandidateSet};
use whalley_domain::{CityType, CountryCode, RegionCandidate};

/// City-level regions shown on the list page and in the intake preview
pub fn region_seed() -> Vec<RegionCandidate> {
    vec![
        RegionCandidate::new("jp-tokyo", "Tokyo", "Japan", CountryCode::JP, 82)
            .with_tags(["추천", "도시"])
            .with_reason("영어 부담 낮고, 도시 인프라로 적응 쉬움")
            .with_city_type(CityType::Metro),
        RegionCandidate::new("au-sydney", "Sydney", "Australia", CountryCode::AU, 74)
            .with_tags(["추천", "영어초보OK"])
            .with_reason("영어 환경 좋지만 비용 리스크 있음")
            .with_city_type(CityType::Metro),
        RegionCandidate::new("au-melbourne", "Melbourne", "Australia", CountryCode::AU, 68)
            .with_tags(["도시"])
            .with_reason("생활 만족도/문화 강점, 비용은 중간")
            .with_city_type(CityType::Metro),
        RegionCandidate::new("jp-osaka", "Osaka", "Japan", CountryCode::JP, 61)
            .with_tags(["도시"])
            .with_reason("안정적인 선택, 생활비 부담 비교적 낮음")
            .with_city_type(CityType::Metro),
    ]
}

/// Country-level entries for the map recommendations panel
pub fn country_seed() -> Vec<RegionCandidate> {
    vec![
        RegionCandidate::country("au", "Australia", CountryCode::AU, 82),
        RegionCandidate::country("ca", "Canada", CountryCode::CA, 74),
        RegionCandidate::country("nz", "New Zealand", CountryCode::NZ, 71),
        RegionCandidate::country("de", "Germany", CountryCode::DE, 61),
        RegionCandidate::country("jp", "Japan", CountryCode::JP, 58),
    ]
}

/// In-memory catalog serving the built-in seeds
#[derive(Debug, Clone)]
pub struct SeedCatalog {
    regions: Vec<RegionCandidate>,
    countries: Vec<RegionCandidate>,
}

impl SeedCatalog {
    pub fn new() -> Self {
        Self::with_candidates(region_seed(), country_seed())
    }

    /// Catalog over custom records
    pub fn with_candidates(regions: Vec<RegionCandidate>, countries: Vec<RegionCandidate>) -> Self {
        Self { regions, countries }
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateCatalog for SeedCatalog {
    fn candidates(&self, set: CandidateSet) -> Vec<RegionCandidate> {
        match set {
            CandidateSet::Regions => self.regions.clone(),
            CandidateSet::Countries => self.countries.clone(),
        }
    }
}
