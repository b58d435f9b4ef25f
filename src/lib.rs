//! sim-shell - A simulated command line over a layered virtual file system
//!
//! A small interpreter for `ls`, `cd`, `mkdir`, `touch`, `cat` and shell
//! variables. Files live in two in-memory trees: a permanent tree fixed at
//! startup (whose files may be fetched on demand) and a local tree that the
//! user's commands modify.

pub mod commands;
pub mod config;
pub mod fs;
pub mod network;
pub mod session;
pub mod shell;
pub mod terminal;

pub use commands::{CommandResult, HostEffect};
pub use config::ShellConfig;
pub use shell::{Shell, ShellOptions};
pub use terminal::{BufferSink, OutputSink, Terminal};
