//! Filesystem pattern helpers shared by the scanner and the reconciler

use crate::core::{DataIoError, Result};
use glob::{MatchOptions, Pattern};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Shell-like matching: case sensitive, `*` never crosses a separator
/// and never matches a leading dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Escape a directory so it can prefix a glob pattern literally
pub fn escape_dir(dir: &Path) -> Result<PathBuf> {
    let dir_str = dir
        .to_str()
        .ok_or_else(|| DataIoError::MalformedPath(dir.to_path_buf()))?;
    Ok(PathBuf::from(Pattern::escape(dir_str)))
}

/// Regular files matching `file_pattern` inside `dir`, sorted by path.
///
/// `dir` is matched literally; `file_pattern` may contain wildcards and
/// further `/`-separated components.
pub fn glob_files(dir: &Path, file_pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern = escape_dir(dir)?.join(file_pattern);
    let pattern = pattern
        .to_str()
        .ok_or_else(|| DataIoError::MalformedPath(pattern.clone()))?;

    debug!("Searching {pattern}");

    let mut files = Vec::new();
    for entry in glob::glob_with(pattern, MATCH_OPTIONS)? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            // unreadable entries are skipped, not fatal
            Err(e) => warn!("Skipping unreadable path {:?}: {}", e.path(), e.error()),
        }
    }

    files.sort();
    Ok(files)
}
