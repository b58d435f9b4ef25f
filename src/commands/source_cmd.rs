use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct SourceCommand;

#[async_trait]
impl Command for SourceCommand {
    fn name(&self) -> &'static str {
        "source"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success("source command is not implemented in this demo.".to_string())
    }
}
