use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult, HostEffect};

pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &'static str {
        "quit"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success("Bye!".to_string()).with_effect(HostEffect::Quit)
    }
}
