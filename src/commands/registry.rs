// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::echo::EchoCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::print_cmd::PrintCommand;
use super::quit_cmd::QuitCommand;
use super::run_cmd::RunCommand;
use super::set_cmd::SetCommand;
use super::source_cmd::SourceCommand;
use super::touch::TouchCommand;

/// Register the full command table.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(QuitCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(SetCommand));
    registry.register(Box::new(PrintCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(SourceCommand));
    registry.register(Box::new(RunCommand));
}

/// Create a registry holding every builtin.
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}
