//! Intake questionnaire, answers and session state.
//!
//! The joined answer text feeds the keyword adjustment in
//! [`crate::ranking::adjust`].

pub mod answers;
pub mod question;
pub mod session;
