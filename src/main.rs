/// lgrep: select lines matching one or more patterns
///
/// Thin command driver over the library: parses flags, assembles the
/// pattern set, then scans each input file (or standard input) in order.
/// Filename printing for names-only mode and the process exit status live
/// here; all selection semantics live in the library.
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::debug;

use lgrep::{Error, LineMatcher, Options, PatternSet, scan_stream};

/// Label reported for standard input in names-only mode.
const STDIN_LABEL: &str = "(standard input)";

#[derive(Parser)]
#[command(name = "lgrep")]
#[command(about = "Select lines matching one or more patterns", long_about = None)]
#[command(version)]
struct Cli {
    /// Pattern to match; may be given multiple times
    #[arg(short = 'e', long = "regexp", value_name = "PATTERN")]
    patterns: Vec<String>,

    /// Read patterns from FILE, one per line; may be given multiple times
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pattern_files: Vec<PathBuf>,

    /// Write only a count of selected lines per input
    #[arg(short = 'c', long = "count")]
    count: bool,

    /// Write only the names of files containing selected lines
    #[arg(short = 'l', long = "files-with-matches")]
    names_only: bool,

    /// Write nothing; the exit status tells whether anything matched
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Match patterns without regard to case
    #[arg(short = 'i', long = "ignore-case")]
    ignore_case: bool,

    /// Precede each output line by its line number in the file
    #[arg(short = 'n', long = "line-number")]
    line_numbers: bool,

    /// Suppress error messages for nonexistent or unreadable files
    #[arg(short = 's', long = "no-messages")]
    suppress_errors: bool,

    /// Select lines that do NOT match any pattern
    #[arg(short = 'v', long = "invert-match")]
    invert_match: bool,

    /// Select a line only if a pattern matches it in its entirety
    #[arg(short = 'x', long = "line-regexp")]
    whole_line: bool,

    /// PATTERN (when no -e/-f is given) followed by input files
    #[arg(value_name = "PATTERN_AND_FILES")]
    args: Vec<String>,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            count: self.count,
            names_only: self.names_only,
            quiet: self.quiet,
            ignore_case: self.ignore_case,
            line_numbers: self.line_numbers,
            suppress_errors: self.suppress_errors,
            invert_match: self.invert_match,
            whole_line: self.whole_line,
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    // Nothing at all given: show usage, exit clean.
    if cli.patterns.is_empty() && cli.pattern_files.is_empty() && cli.args.is_empty() {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    }

    let options = cli.options();
    match run(&cli, &options) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            if !(options.suppress_errors && err.is_suppressible()) {
                eprintln!("lgrep: {err}");
            }
            ExitCode::from(2)
        }
    }
}

/// Initialize logging: warn+ to stderr unless RUST_LOG overrides.
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Scan every input in order; returns whether any input matched.
fn run(cli: &Cli, options: &Options) -> lgrep::Result<bool> {
    let (pattern_set, files) = PatternSet::from_args(&cli.patterns, &cli.pattern_files, &cli.args)?;
    debug!("{} patterns, {} input files", pattern_set.len(), files.len());

    let matcher = LineMatcher::new(&pattern_set, options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut matched_any = false;

    if files.is_empty() {
        let stdin = io::stdin();
        let result = scan_stream(stdin.lock(), &matcher, options, &mut out)?;
        if result.matched_any {
            matched_any = true;
            report_name(&mut out, options, STDIN_LABEL)?;
        }
    } else {
        for name in &files {
            let file = match File::open(name) {
                Ok(file) => file,
                Err(err) if options.suppress_errors => {
                    // Unreadable input contributes zero matches; move on.
                    debug!("skipping {name}: {err}");
                    continue;
                }
                Err(source) => {
                    return Err(Error::Open {
                        path: PathBuf::from(name),
                        source,
                    });
                }
            };

            let result = scan_stream(BufReader::new(file), &matcher, options, &mut out)?;
            if result.matched_any {
                matched_any = true;
                report_name(&mut out, options, name)?;
            }
        }
    }

    Ok(matched_any)
}

/// Print the input's name after a matching scan, names-only mode only.
fn report_name<W: Write>(out: &mut W, options: &Options, name: &str) -> lgrep::Result<()> {
    if options.names_only && !options.quiet {
        writeln!(out, "{name}")?;
    }
    Ok(())
}
