//! File System Module
//!
//! Layered virtual file system for the shell:
//! - `types`: directory nodes, file content and errors
//! - `path`: path resolution over a single tree
//! - `layered_fs`: permanent + local trees merged at read time

pub mod types;
pub mod path;
pub mod layered_fs;

pub use types::*;
pub use layered_fs::{LayeredFs, EMPTY_DIRECTORY};
