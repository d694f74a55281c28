//! Region ranking: filter predicate, sort comparator and derived score
//! adjustment, composed by [`pipeline`].
//!
//! All functions here are pure and total. Inputs that would be "invalid"
//! (out-of-range bounds, unknown keywords) are clamped or ignored.

pub mod adjust;
pub mod filter;
pub mod pipeline;
pub mod sort;
