//! Core domain concepts shared across all subdomains.
//!
//! - [`score::Score`]: a clamped 0..=100 destination score
//! - [`error::DomainError`]: domain-level parse errors

pub mod error;
pub mod score;
