use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult, HostEffect};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        // The host erases the sink; no response line is printed.
        CommandResult::empty().with_effect(HostEffect::Clear)
    }
}
