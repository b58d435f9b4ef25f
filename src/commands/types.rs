// src/commands/types.rs
use async_trait::async_trait;
use thiserror::Error;

use crate::fs::FsError;
use crate::network::FetchError;
use crate::session::Session;

/// Side effect the host terminal must apply after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostEffect {
    #[default]
    None,
    /// Erase the output sink; nothing is appended for this command.
    Clear,
    /// Stop accepting input.
    Quit,
}

/// Result of a command: the response text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub output: String,
    pub exit_code: i32,
    pub effect: HostEffect,
}

impl CommandResult {
    pub fn success(output: String) -> Self {
        Self { output, exit_code: 0, effect: HostEffect::None }
    }

    pub fn error(output: String) -> Self {
        Self { output, exit_code: 1, effect: HostEffect::None }
    }

    pub fn empty() -> Self {
        Self::success(String::new())
    }

    pub fn with_effect(mut self, effect: HostEffect) -> Self {
        self.effect = effect;
        self
    }
}

impl<E: std::error::Error> From<Result<(), E>> for CommandResult {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => CommandResult::empty(),
            Err(e) => CommandResult::error(e.to_string()),
        }
    }
}

/// Errors reported by the dispatcher and the command handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {name}")]
    Unknown { name: String },

    #[error("Unknown command")]
    Arity,

    #[error("Variable does not exist")]
    VariableNotFound,

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Number of positional arguments a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    Any,
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Any => true,
        }
    }
}

/// Command execution context
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub session: &'a mut Session,
}

/// Command trait
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    fn arity(&self) -> Arity {
        Arity::Any
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
