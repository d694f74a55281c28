//! Static seed data served through the candidate catalog port

mod catalog;

pub use catalog::{SeedCatalog, country_seed, region_seed};
