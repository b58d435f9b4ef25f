//! Configuration
//!
//! Terminal settings and the permanent tree, loaded from TOML:
//!
//! ```toml
//! banner = "Hello!"
//! content_root = "./content"
//!
//! [permanent.dirs.aboutMe.files]
//! "resume.txt" = { path = "aboutMe/resume.txt" }
//! "motd.txt" = "inline text"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::fs::{FileContent, PermanentTree};

pub const DEFAULT_BANNER: &str = "Welcome! Type help to see all commands available to you.\n\
Note: The mkdir and touch commands modify only your local session and will not affect my permanent files so feel free to play around!\n\n";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Text printed once when the terminal starts.
    pub banner: String,
    /// Echo `$ <command>` before each response.
    pub echo_input: bool,
    /// Directory that deferred permanent files are served from.
    pub content_root: Option<PathBuf>,
    pub permanent: PermanentTree,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            echo_input: true,
            content_root: None,
            permanent: default_permanent_tree(),
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// `/aboutMe` with a resume and contact card, both fetched on demand.
pub fn default_permanent_tree() -> PermanentTree {
    PermanentTree::new().with_dir(
        "aboutMe",
        PermanentTree::new()
            .with_file("resume.txt", FileContent::deferred("aboutMe/resume.txt"))
            .with_file("contactMe.txt", FileContent::deferred("aboutMe/contactMe.txt")),
    )
}
