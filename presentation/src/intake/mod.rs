//! Interactive intake questionnaire

pub mod repl;
