// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod echo;
pub mod help_cmd;
pub mod ls;
pub mod mkdir;
pub mod print_cmd;
pub mod quit_cmd;
pub mod registry;
pub mod run_cmd;
pub mod set_cmd;
pub mod source_cmd;
pub mod touch;
pub mod types;

pub use registry::{create_default_registry, CommandRegistry};
pub use types::{Arity, Command, CommandContext, CommandError, CommandResult, HostEffect};
