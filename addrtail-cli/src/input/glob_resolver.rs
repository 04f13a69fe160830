//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Input name that stands for standard input
pub const STDIN_MARKER: &str = "-";

/// Resolve file patterns to actual file paths.
///
/// Paths are returned sorted and deduplicated; `-` is passed through as
/// the standard-input marker and sorts first.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if pattern == STDIN_MARKER {
            files.push(PathBuf::from(STDIN_MARKER));
            continue;
        }

        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!(CliError::FileNotFound(patterns.join(", ")));
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.csv", "a.csv", "notes.txt"] {
            fs::write(temp_dir.path().join(name), "x\n").unwrap();
        }

        let pattern = temp_dir.path().join("*.csv").display().to_string();
        let explicit = temp_dir.path().join("a.csv").display().to_string();
        let files = resolve_patterns(&[pattern, explicit]).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_no_match_is_file_not_found() {
        let err = resolve_patterns(&["/nonexistent/*.csv".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_stdin_marker_passes_through() {
        let files = resolve_patterns(&["-".to_string()]).unwrap();
        assert_eq!(files, vec![PathBuf::from("-")]);
    }
}
