/// Pattern-set assembly.
///
/// Patterns come from two sources: strings given directly on the command
/// line and files holding one pattern per line. Direct patterns are kept
/// first, then file patterns in file order, each file's internal line order
/// preserved. Order never affects which lines are selected (any pattern
/// matching is enough) but it decides which pattern's compile error is
/// reported first, so it must be deterministic.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};

/// Ordered, immutable collection of raw pattern strings.
///
/// Assembled once per invocation and never mutated during scanning.
/// Compilation (regex syntax validation) is deferred to
/// [`LineMatcher::new`](crate::matcher::LineMatcher::new) so a bad pattern
/// fails once, deterministically.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<String>,
}

impl PatternSet {
    /// Assemble patterns from direct strings and pattern files.
    ///
    /// A pattern file that cannot be opened or read is an
    /// [`Error::Open`]/[`Error::Io`] and aborts the invocation; the
    /// no-messages option only silences the report, never the abort.
    ///
    /// Blank lines in a pattern file are kept as patterns. An empty pattern
    /// matches every line, consistent with the empty-pattern fallback below.
    pub fn build(direct: &[String], files: &[PathBuf]) -> Result<Self> {
        let mut patterns: Vec<String> = direct.to_vec();

        for path in files {
            let file = File::open(path).map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;
            for line in BufReader::new(file).lines() {
                patterns.push(line?);
            }
        }

        debug!("assembled pattern set with {} patterns", patterns.len());
        Ok(Self { patterns })
    }

    /// Resolve pattern sources against the positional arguments.
    ///
    /// When no direct patterns and no pattern files were given, the first
    /// positional argument is the sole pattern and the rest are input
    /// files; otherwise every positional argument is an input file.
    /// Returns the assembled set plus the input file names.
    ///
    /// With no sources and no positionals at all, the set holds a single
    /// empty-string pattern, which matches every line (unless negated) —
    /// the set is never empty in practice.
    pub fn from_args(
        direct: &[String],
        files: &[PathBuf],
        positional: &[String],
    ) -> Result<(Self, Vec<String>)> {
        if direct.is_empty() && files.is_empty() {
            let mut args = positional.iter();
            let pattern = args.next().cloned().unwrap_or_default();
            Ok((Self::from_single(pattern), args.cloned().collect()))
        } else {
            let set = Self::build(direct, files)?;
            Ok((set, positional.to_vec()))
        }
    }

    /// A set holding exactly one pattern.
    pub fn from_single(pattern: impl Into<String>) -> Self {
        Self {
            patterns: vec![pattern.into()],
        }
    }

    /// A set holding no patterns at all. Selects nothing (everything when
    /// negated); exists for the matcher's explicit empty-set behavior.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Patterns in assembly order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }
}
