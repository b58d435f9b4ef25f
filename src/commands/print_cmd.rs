use async_trait::async_trait;
use crate::commands::{Arity, Command, CommandContext, CommandError, CommandResult};

pub struct PrintCommand;

#[async_trait]
impl Command for PrintCommand {
    fn name(&self) -> &'static str {
        "print"
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(1)
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.args.first().map(String::as_str).unwrap_or_default();
        match ctx.session.vars.get(name) {
            Some(value) => CommandResult::success(value.to_string()),
            None => CommandResult::error(CommandError::VariableNotFound.to_string()),
        }
    }
}
