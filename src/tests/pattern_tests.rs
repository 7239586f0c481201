// Pattern-set assembly from direct arguments and pattern files.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use crate::error::Error;
use crate::matcher::LineMatcher;
use crate::options::Options;
use crate::pattern::PatternSet;

fn write_pattern_file(dir: &TempDir, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn test_direct_patterns_precede_file_patterns() -> Result<()> {
    let dir = TempDir::new()?;
    let first = write_pattern_file(&dir, "first.pat", "cat\n")?;
    let second = write_pattern_file(&dir, "second.pat", "dog\n")?;

    let set = PatternSet::build(&["bird".to_string()], &[first, second])?;

    let patterns: Vec<&str> = set.iter().collect();
    assert_eq!(patterns, ["bird", "cat", "dog"]);

    // Each pattern is independently capable of causing a match.
    let matcher = LineMatcher::new(&set, &Options::default())?;
    assert!(matcher.is_selected("one bird"));
    assert!(matcher.is_selected("one cat"));
    assert!(matcher.is_selected("one dog"));
    assert!(!matcher.is_selected("one fish"));
    Ok(())
}

#[test]
fn test_file_line_order_is_preserved() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_pattern_file(&dir, "multi.pat", "alpha\nbeta\ngamma\n")?;

    let set = PatternSet::build(&[], &[path])?;
    let patterns: Vec<&str> = set.iter().collect();
    assert_eq!(patterns, ["alpha", "beta", "gamma"]);
    Ok(())
}

#[test]
fn test_blank_pattern_file_lines_are_kept() -> Result<()> {
    // A blank line is an empty pattern, which matches every line.
    let dir = TempDir::new()?;
    let path = write_pattern_file(&dir, "blank.pat", "cat\n\n")?;

    let set = PatternSet::build(&[], &[path])?;
    let patterns: Vec<&str> = set.iter().collect();
    assert_eq!(patterns, ["cat", ""]);

    let matcher = LineMatcher::new(&set, &Options::default())?;
    assert!(matcher.is_selected("no animals here"));
    Ok(())
}

#[test]
fn test_missing_pattern_file_is_an_open_error() {
    let missing = PathBuf::from("/nonexistent/patterns.pat");
    let err = PatternSet::build(&[], &[missing.clone()])
        .err()
        .expect("open should fail");
    // The no-messages option may silence this report, never the abort.
    assert!(err.is_suppressible());
    match err {
        Error::Open { path, .. } => assert_eq!(path, missing),
        other => panic!("expected an open error, got {other}"),
    }
}

#[test]
fn test_positional_fallback_takes_first_argument_as_pattern() -> Result<()> {
    let args = vec!["cat".to_string(), "a.txt".to_string(), "b.txt".to_string()];
    let (set, files) = PatternSet::from_args(&[], &[], &args)?;

    let patterns: Vec<&str> = set.iter().collect();
    assert_eq!(patterns, ["cat"]);
    assert_eq!(files, ["a.txt", "b.txt"]);
    Ok(())
}

#[test]
fn test_no_fallback_when_direct_patterns_given() -> Result<()> {
    let args = vec!["a.txt".to_string(), "b.txt".to_string()];
    let (set, files) = PatternSet::from_args(&["cat".to_string()], &[], &args)?;

    let patterns: Vec<&str> = set.iter().collect();
    assert_eq!(patterns, ["cat"]);
    assert_eq!(files, ["a.txt", "b.txt"]);
    Ok(())
}

#[test]
fn test_empty_sources_yield_single_empty_pattern() -> Result<()> {
    let (set, files) = PatternSet::from_args(&[], &[], &[])?;
    assert_eq!(set.len(), 1);
    assert!(files.is_empty());

    // The empty pattern matches every line, so the set never silently
    // matches nothing.
    let matcher = LineMatcher::new(&set, &Options::default())?;
    assert!(matcher.is_selected("anything"));
    Ok(())
}
