// lgrep - line-filtering utility library
//!
//! Selects lines from text streams that match (or do not match) a set of
//! regular-expression patterns, with output modes for printing matches,
//! counts, filenames, or nothing at all.

pub mod error;
pub mod matcher;
pub mod options;
pub mod pattern;
pub mod scanner;

#[cfg(test)]
pub mod tests;

// Re-export common types
pub use error::{Error, Result};
pub use matcher::LineMatcher;
pub use options::Options;
pub use pattern::PatternSet;
pub use scanner::{MatchOutcome, StreamResult, scan_stream};
