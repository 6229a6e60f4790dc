//! A command built from plain data and an optional closure

use std::fmt;
use std::io::Read;
use std::rc::Rc;

use crate::core::Command;

/// Signature of a [`BasicCommand`] action
pub type ExecuteFn = dyn Fn(&[String], &mut dyn Read) -> bool;

/// Default implementation of [`Command`]
///
/// Returns its fields to satisfy the trait. Without an action, `execute`
/// returns `false` so invoking it prints its help.
pub struct BasicCommand {
    name: String,
    short_help: String,
    long_help: String,
    action: Option<Box<ExecuteFn>>,
    sub_commands: Vec<Rc<dyn Command>>,
}

impl BasicCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_help: String::new(),
            long_help: String::new(),
            action: None,
            sub_commands: Vec::new(),
        }
    }

    pub fn with_short_help(mut self, text: impl Into<String>) -> Self {
        self.short_help = text.into();
        self
    }

    pub fn with_long_help(mut self, text: impl Into<String>) -> Self {
        self.long_help = text.into();
        self
    }

    /// Set the action run by `execute`
    pub fn on_execute<F>(mut self, action: F) -> Self
    where
        F: Fn(&[String], &mut dyn Read) -> bool + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    /// Append a subcommand
    pub fn sub_command(mut self, command: Rc<dyn Command>) -> Self {
        self.sub_commands.push(command);
        self
    }
}

impl Command for BasicCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn short_help(&self) -> &str {
        &self.short_help
    }

    fn long_help(&self) -> &str {
        &self.long_help
    }

    fn execute(&self, args: &[String], stdin: &mut dyn Read) -> bool {
        match &self.action {
            Some(action) => action(args, stdin),
            None => false,
        }
    }

    fn sub_commands(&self) -> &[Rc<dyn Command>] {
        &self.sub_commands
    }
}

impl fmt::Debug for BasicCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCommand")
            .field("name", &self.name)
            .field("short_help", &self.short_help)
            .field("has_action", &self.action.is_some())
            .field("sub_commands", &self.sub_commands.len())
            .finish()
    }
}
