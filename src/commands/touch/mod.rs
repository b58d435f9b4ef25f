// src/commands/touch/mod.rs
use async_trait::async_trait;
use crate::commands::{Arity, Command, CommandContext, CommandResult};

/// Create an empty file in the local tree under the current path.
pub struct TouchCommand;

#[async_trait]
impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(1)
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.args.first().map(String::as_str).unwrap_or_default();
        ctx.session.fs.touch(name).into()
    }
}
