//! Content path checks for file-backed providers.
//!
//! Deferred paths are relative keys such as `aboutMe/resume.txt`. When they
//! are served from a directory on disk they must stay inside it.

use std::path::{Path, PathBuf};

/// True if `path` is a relative path made only of normal segments.
pub fn is_path_allowed(path: &str) -> bool {
    if path.is_empty() || path.starts_with('/') || path.starts_with('\\') {
        return false;
    }
    path.split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .all(|segment| segment != ".." && segment != "." && !segment.contains(':'))
}

/// Join an allowed content path onto `root`. Returns `None` for paths that
/// would escape the root.
pub fn content_path(root: &Path, path: &str) -> Option<PathBuf> {
    if !is_path_allowed(path) {
        return None;
    }
    let mut full = root.to_path_buf();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        full.push(segment);
    }
    Some(full)
}
