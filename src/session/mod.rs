//! Session State
//!
//! Everything that persists between commands: both file system trees, the
//! current path, shell variables, and the content provider for deferred
//! files. One `Session` lives for the lifetime of a terminal.

pub mod variables;

pub use variables::VariableStore;

use crate::fs::LayeredFs;
use crate::network::FetchFn;

pub struct Session {
    pub fs: LayeredFs,
    pub vars: VariableStore,
    pub fetch_fn: Option<FetchFn>,
}

impl Session {
    pub fn new(fs: LayeredFs, vars: VariableStore, fetch_fn: Option<FetchFn>) -> Self {
        Self { fs, vars, fetch_fn }
    }

    pub fn cwd(&self) -> &str {
        self.fs.cwd()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(LayeredFs::default(), VariableStore::new(), None)
    }
}
