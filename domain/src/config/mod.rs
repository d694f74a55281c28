//! Configuration-related domain value objects.

mod output_format;

pub use output_format::OutputFormat;
