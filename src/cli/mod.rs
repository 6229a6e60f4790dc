//! CLI module - the `ninja` demonstration program
//!
//! A madeup CLI built on the driver: `ninja punch --execute`,
//! `ninja kick --execute`, or plain `ninja` for help.

pub mod commands;
pub mod config;
pub mod logging;

use std::io::{Read, Write};
use std::rc::Rc;

use crate::cmd::RootCommand;
use crate::core::{Driver, DriverError};

pub use config::Config;

pub const ROOT_HELP: &str = "Usage: ninja COMMAND [args]

A madeup CLI to demonstrate this framework";

/// The full `ninja` command tree
pub fn root() -> RootCommand {
    RootCommand::new(ROOT_HELP)
        .sub_command(Rc::new(commands::punch::command()))
        .sub_command(Rc::new(commands::kick::KickCommand))
}

/// Register the `ninja` tree with `driver` and dispatch its arguments
pub fn run<R: Read, W: Write>(driver: &mut Driver<R, W>) -> Result<(), DriverError> {
    driver.register_root(Rc::new(root()))?;
    driver.parse_input()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Env;
    use std::io;

    fn run_with(args: &[&str]) -> String {
        let mut full = vec!["ninja"];
        full.extend_from_slice(args);
        let mut driver = Driver::with_env(
            Env::process()
                .with_args(full)
                .with_stdin(io::empty())
                .with_stdout(Vec::new()),
        );
        run(&mut driver).unwrap();
        String::from_utf8(driver.into_env().stdout).unwrap()
    }

    #[test]
    fn test_bare_invocation_lists_commands() {
        let expected = format!(
            "{}\n\nCommands:\n    punch - punch your shell\n    kick  - kick your shell\n",
            ROOT_HELP
        );
        assert_eq!(run_with(&[]), expected);
    }

    #[test]
    fn test_unknown_command_falls_back_to_root() {
        assert!(run_with(&["slap"]).starts_with("Usage: ninja COMMAND [args]"));
    }

    #[test]
    fn test_punch_without_flag_prints_its_help() {
        assert_eq!(
            run_with(&["punch"]),
            format!("{}\n", commands::punch::LONG_HELP)
        );
    }
}
