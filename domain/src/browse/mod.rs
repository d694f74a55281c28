//! View state for browsing candidates.

pub mod list_state;
