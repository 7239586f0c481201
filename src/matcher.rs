/// Line matching against a compiled pattern set.
///
/// Each pattern compiles exactly once, at construction, in set order.
/// Matching a line is then a logical OR over the compiled patterns with
/// short-circuit on the first hit, optionally inverted.
use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::pattern::PatternSet;

/// Decides whether a single line of text is selected.
///
/// Case-insensitivity is a compilation-mode flag on the regex, never a
/// transformation of the line text, so printed lines stay verbatim.
/// Whole-line mode anchors the compiled form so the pattern must match the
/// complete line content, not merely a substring.
pub struct LineMatcher {
    regexes: Vec<Regex>,
    invert: bool,
}

impl LineMatcher {
    /// Compile every pattern in the set.
    ///
    /// Fails with [`Error::Pattern`] naming the first syntactically invalid
    /// pattern in set order. A bad pattern is fatal to the whole invocation
    /// and surfaces here once, never once per scanned line.
    pub fn new(patterns: &PatternSet, options: &Options) -> Result<Self> {
        let mut regexes = Vec::with_capacity(patterns.len());
        for pattern in patterns.iter() {
            let source = if options.whole_line {
                format!("^(?:{pattern})$")
            } else {
                pattern.to_string()
            };
            let regex = RegexBuilder::new(&source)
                .case_insensitive(options.ignore_case)
                .build()
                .map_err(|source| Error::Pattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
            regexes.push(regex);
        }
        Ok(Self {
            regexes,
            invert: options.invert_match,
        })
    }

    /// Whether `line` is selected under the configured semantics.
    ///
    /// An empty set selects nothing (inverted: everything). Pattern order
    /// never affects the outcome, only which pattern short-circuits.
    pub fn is_selected(&self, line: &str) -> bool {
        let matched = self.regexes.iter().any(|regex| regex.is_match(line));
        matched != self.invert
    }
}
