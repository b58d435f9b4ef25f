//! File System Types
//!
//! Core types for the layered virtual file system.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File system errors.
///
/// The `Display` output of each variant is the exact response shown to the
/// user, so the dispatcher can surface them without further formatting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("Bad command: {operation}")]
    BadCommand { operation: String },

    #[error("Directory already exists")]
    DirectoryExists,

    #[error("File already exists")]
    FileExists,

    #[error("File already exists (permanent)")]
    PermanentConflict,

    #[error("Already at root")]
    AlreadyAtRoot,

    #[error("File not found")]
    FileNotFound,

    #[error("Current directory not found in localFS")]
    LocalDirMissing,
}

impl FsError {
    pub fn bad_command(operation: &str) -> Self {
        FsError::BadCommand { operation: operation.to_string() }
    }
}

/// Content of a permanent file.
///
/// Inline content is available immediately; deferred content is fetched on
/// demand from the external content provider using `path` as the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileContent {
    Inline(String),
    Deferred { path: String },
}

impl FileContent {
    pub fn deferred(path: impl Into<String>) -> Self {
        FileContent::Deferred { path: path.into() }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, FileContent::Deferred { .. })
    }
}

impl From<String> for FileContent {
    fn from(s: String) -> Self {
        FileContent::Inline(s)
    }
}

impl From<&str> for FileContent {
    fn from(s: &str) -> Self {
        FileContent::Inline(s.to_string())
    }
}

/// A directory in one of the trees. `F` is the file payload type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirNode<F> {
    #[serde(default = "IndexMap::new")]
    pub files: IndexMap<String, F>,
    #[serde(default = "IndexMap::new")]
    pub dirs: IndexMap<String, DirNode<F>>,
}

impl<F> DirNode<F> {
    pub fn new() -> Self {
        Self { files: IndexMap::new(), dirs: IndexMap::new() }
    }

    /// Builder-style helper for assembling trees in code.
    pub fn with_file(mut self, name: &str, content: impl Into<F>) -> Self {
        self.files.insert(name.to_string(), content.into());
        self
    }

    /// Builder-style helper for assembling trees in code.
    pub fn with_dir(mut self, name: &str, dir: DirNode<F>) -> Self {
        self.dirs.insert(name.to_string(), dir);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }
}

impl<F> Default for DirNode<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only-by-command layer. May hold deferred content.
pub type PermanentTree = DirNode<FileContent>;

/// Mutable layer. Files are always inline strings.
pub type LocalTree = DirNode<String>;

/// Which tree an entry in a combined view came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Permanent,
    Local,
}

/// A file as seen through the combined view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRef<'a> {
    Local(&'a str),
    Permanent(&'a FileContent),
}

/// Read-time merge of both trees at one path. Never stored.
#[derive(Debug, Default)]
pub struct CombinedView<'a> {
    pub dirs: IndexMap<&'a str, Layer>,
    pub files: IndexMap<&'a str, FileRef<'a>>,
}

impl CombinedView<'_> {
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }
}
