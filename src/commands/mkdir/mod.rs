// src/commands/mkdir/mod.rs
use async_trait::async_trait;
use crate::commands::{Arity, Command, CommandContext, CommandResult};

/// Create a directory in the local tree under the current path.
pub struct MkdirCommand;

#[async_trait]
impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(1)
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.args.first().map(String::as_str).unwrap_or_default();
        ctx.session.fs.mkdir(name).into()
    }
}
