use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct RunCommand;

#[async_trait]
impl Command for RunCommand {
    fn name(&self) -> &'static str {
        "run"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success("run command is not supported in this browser-based shell.".to_string())
    }
}
