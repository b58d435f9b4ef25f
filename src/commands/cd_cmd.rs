//! cd - change the current path
//!
//! Supports:
//! - cd DIR - enter a child directory of either tree
//! - cd .. - go up one level (reports "Already at root" at `/`)

use async_trait::async_trait;
use crate::commands::{Arity, Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(1)
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.args.first().map(String::as_str).unwrap_or_default();
        match ctx.session.fs.cd(name) {
            // Reported, but the command itself succeeds.
            Err(e @ FsError::AlreadyAtRoot) => CommandResult::success(e.to_string()),
            result => result.into(),
        }
    }
}
