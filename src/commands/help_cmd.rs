use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct HelpCommand;

const USAGE: &[(&str, &str)] = &[
    ("help", "Displays all the commands"),
    ("quit", "Exits the shell (refresh the page to restart)"),
    ("clear", "Clears the terminal output"),
    ("set VAR STRING", "Sets a variable in shell memory"),
    ("print VAR", "Displays the variable's value"),
    ("echo STRING", "Echoes input (supports $VAR substitution)"),
    ("ls", "Lists files/directories in current folder"),
    ("mkdir DIR", "Creates a new directory (local only)"),
    ("touch FILE", "Creates a new file (local only)"),
    ("cd DIR", "Changes directory (supports \"..\" to go back)"),
    ("cat FILE", "Displays the contents of a file"),
];

pub fn help_text() -> String {
    let mut text = String::from("Available commands:\n");
    for (usage, description) in USAGE {
        text.push_str(&format!("{:<16}{}\n", usage, description));
    }
    text
}

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str { "help" }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success(help_text())
    }
}
