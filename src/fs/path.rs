//! Path Resolution
//!
//! Slash-delimited paths are walked segment by segment over `DirNode::dirs`.
//! Empty segments are discarded, so leading, trailing and doubled slashes are
//! all treated the same way.

use super::types::DirNode;

pub const ROOT: &str = "/";

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|p| !p.is_empty())
}

/// Walk `path` from `root`. Returns `None` as soon as a segment is missing.
pub fn resolve<'a, F>(root: &'a DirNode<F>, path: &str) -> Option<&'a DirNode<F>> {
    let mut dir = root;
    for part in segments(path) {
        dir = dir.dirs.get(part)?;
    }
    Some(dir)
}

/// Mutable counterpart of [`resolve`].
pub fn resolve_mut<'a, F>(root: &'a mut DirNode<F>, path: &str) -> Option<&'a mut DirNode<F>> {
    let mut dir = root;
    for part in segments(path) {
        dir = dir.dirs.get_mut(part)?;
    }
    Some(dir)
}

/// Append a single segment to an absolute path.
pub fn join(base: &str, name: &str) -> String {
    if base == ROOT {
        format!("/{}", name)
    } else {
        format!("{}/{}", base, name)
    }
}

/// Drop the last segment. The parent of a top-level directory is exactly `/`.
pub fn parent(path: &str) -> String {
    let mut parts: Vec<&str> = segments(path).collect();
    parts.pop();
    if parts.is_empty() {
        ROOT.to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

pub fn is_root(path: &str) -> bool {
    segments(path).next().is_none()
}
