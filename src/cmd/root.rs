//! The unnamed top of a command tree

use std::io::Read;
use std::rc::Rc;

use crate::core::Command;

/// Root command whose only job is to list its subcommands
///
/// It is named `""` and never executes, so running the program without a
/// recognised subcommand prints `help` followed by the command listing.
#[derive(Debug, Default)]
pub struct RootCommand {
    help: String,
    sub_commands: Vec<Rc<dyn Command>>,
}

impl RootCommand {
    pub fn new(help: impl Into<String>) -> Self {
        Self {
            help: help.into(),
            sub_commands: Vec::new(),
        }
    }

    /// Append a subcommand
    pub fn sub_command(mut self, command: Rc<dyn Command>) -> Self {
        self.sub_commands.push(command);
        self
    }
}

impl Command for RootCommand {
    fn name(&self) -> &str {
        ""
    }

    fn short_help(&self) -> &str {
        ""
    }

    fn long_help(&self) -> &str {
        &self.help
    }

    fn execute(&self, _args: &[String], _stdin: &mut dyn Read) -> bool {
        false
    }

    fn sub_commands(&self) -> &[Rc<dyn Command>] {
        &self.sub_commands
    }
}
