use async_trait::async_trait;
use crate::commands::{Arity, Command, CommandContext, CommandResult};

/// `set VAR STRING...` stores the remaining words joined by single spaces.
pub struct SetCommand;

#[async_trait]
impl Command for SetCommand {
    fn name(&self) -> &'static str {
        "set"
    }

    fn arity(&self) -> Arity {
        Arity::AtLeast(2)
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let (name, rest) = match ctx.args.split_first() {
            Some(split) => split,
            None => return CommandResult::empty(),
        };
        ctx.session.vars.set(name, rest.join(" "));
        CommandResult::empty()
    }
}
