// src/commands/echo/mod.rs
use async_trait::async_trait;
use crate::commands::{Arity, Command, CommandContext, CommandResult};
use crate::session::VariableStore;

pub struct EchoCommand;

/// Replace every `$NAME` token with the variable's value. Unset variables
/// expand to the empty string; other tokens pass through untouched.
pub fn substitute(tokens: &[String], vars: &VariableStore) -> String {
    tokens
        .iter()
        .map(|token| match token.strip_prefix('$') {
            Some(name) => vars.get(name).unwrap_or_default(),
            None => token.as_str(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn arity(&self) -> Arity {
        Arity::AtLeast(1)
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success(substitute(&ctx.args, &ctx.session.vars))
    }
}
