//! Shell Environment
//!
//! Main entry point for the command interpreter.
//! Ties together the command table, the layered file system and shell memory.

use std::collections::HashMap;

use crate::commands::{create_default_registry, CommandContext, CommandError, CommandRegistry, CommandResult};
use crate::config::default_permanent_tree;
use crate::fs::{LayeredFs, PermanentTree};
use crate::network::FetchFn;
use crate::session::{Session, VariableStore};

/// Options for creating a Shell.
#[derive(Default)]
pub struct ShellOptions {
    /// Permanent tree (defaults to the built-in `/aboutMe` layout)
    pub permanent: Option<PermanentTree>,
    /// Content provider for deferred permanent files
    pub fetch_fn: Option<FetchFn>,
    /// Variables present at session start
    pub variables: Option<HashMap<String, String>>,
}

/// One interpreter session.
pub struct Shell {
    session: Session,
    registry: CommandRegistry,
}

impl Shell {
    pub fn new(options: ShellOptions) -> Self {
        let permanent = options.permanent.unwrap_or_else(default_permanent_tree);
        let vars: VariableStore = options.variables.unwrap_or_default().into_iter().collect();
        let session = Session::new(LayeredFs::new(permanent), vars, options.fetch_fn);
        Self { session, registry: create_default_registry() }
    }

    /// Run one command line and return its response.
    ///
    /// Commands run to completion one at a time; `cat` of a deferred file is
    /// awaited here so its output is never interleaved with a later command.
    pub async fn exec(&mut self, line: &str) -> CommandResult {
        let mut tokens = tokenize(line);
        if tokens.is_empty() {
            return CommandResult::empty();
        }
        let name = tokens.remove(0);

        let Some(command) = self.registry.get(&name) else {
            log::debug!("unknown command {:?}", name);
            return CommandResult::error(CommandError::Unknown { name }.to_string());
        };
        if !command.arity().accepts(tokens.len()) {
            log::debug!("{}: rejected {} argument(s)", name, tokens.len());
            return CommandResult::error(CommandError::Arity.to_string());
        }

        log::debug!("dispatch {} {:?} in {}", name, tokens, self.session.cwd());
        command
            .execute(CommandContext { args: tokens, session: &mut self.session })
            .await
    }

    pub fn cwd(&self) -> &str {
        self.session.cwd()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}

/// Split on single spaces and drop the empty pieces.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(' ').filter(|s| !s.is_empty()).map(String::from).collect()
}
