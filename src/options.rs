/// Behavior flags for one invocation.
///
/// Built once by the CLI driver and passed explicitly into pattern-set
/// assembly, matcher compilation, and stream scanning. There is no global
/// flag state; every component is a function of its explicit inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Write only a count of selected lines per input.
    pub count: bool,

    /// Write only the names of inputs containing selected lines.
    pub names_only: bool,

    /// Write nothing; only the matched/not-matched outcome is computed.
    pub quiet: bool,

    /// Match patterns without regard to case.
    pub ignore_case: bool,

    /// Precede each output line by its 1-based line number.
    pub line_numbers: bool,

    /// Suppress error messages for unreadable inputs.
    pub suppress_errors: bool,

    /// Select lines that do NOT match any pattern.
    pub invert_match: bool,

    /// Accept a match only if the pattern spans the entire line.
    pub whole_line: bool,
}

impl Options {
    /// Should selected lines be written out?
    ///
    /// Mode precedence, highest first: quiet silences everything,
    /// count-only and names-only silence per-line text.
    pub fn print_lines(&self) -> bool {
        !self.quiet && !self.names_only && !self.count
    }

    /// Should the per-stream count be written after the stream is exhausted?
    ///
    /// Quiet silences the count too; names-only replaces it with filename
    /// reporting, which belongs to the driver.
    pub fn print_count(&self) -> bool {
        self.count && !self.quiet && !self.names_only
    }

    /// May scanning stop at the first selected line?
    ///
    /// Only when no active mode needs to see every line: quiet and
    /// names-only need just the matched/not-matched bit, but an exact count
    /// forces a full scan. Stopping early must never skew a reported count.
    pub fn stop_after_first_match(&self) -> bool {
        (self.quiet || self.names_only) && !self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(quiet: bool, count: bool, names_only: bool) -> Options {
        Options {
            quiet,
            count,
            names_only,
            ..Options::default()
        }
    }

    #[test]
    fn test_default_mode_prints_lines_only() {
        let options = Options::default();
        assert!(options.print_lines());
        assert!(!options.print_count());
        assert!(!options.stop_after_first_match());
    }

    #[test]
    fn test_quiet_silences_everything() {
        for count in [false, true] {
            for names_only in [false, true] {
                let options = opts(true, count, names_only);
                assert!(!options.print_lines());
                assert!(!options.print_count());
            }
        }
    }

    #[test]
    fn test_count_mode_prints_count_not_lines() {
        let options = opts(false, true, false);
        assert!(!options.print_lines());
        assert!(options.print_count());
    }

    #[test]
    fn test_names_only_silences_lines_and_count() {
        let options = opts(false, true, true);
        assert!(!options.print_lines());
        assert!(!options.print_count());
    }

    #[test]
    fn test_early_exit_decision_table() {
        // (quiet, count, names_only) -> may stop at first match
        let table = [
            ((false, false, false), false),
            ((false, false, true), true),
            ((false, true, false), false),
            ((false, true, true), false),
            ((true, false, false), true),
            ((true, false, true), true),
            ((true, true, false), false),
            ((true, true, true), false),
        ];
        for ((quiet, count, names_only), expected) in table {
            assert_eq!(
                opts(quiet, count, names_only).stop_after_first_match(),
                expected,
                "quiet={quiet} count={count} names_only={names_only}"
            );
        }
    }
}
