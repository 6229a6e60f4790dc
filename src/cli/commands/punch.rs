//! `ninja punch` - built from a `BasicCommand`

use console::style;

use crate::cmd::BasicCommand;

pub const LONG_HELP: &str = "Punch your shell with the power of 1000 hurricanes.

Usage: punch [OPTIONS]

Options:
  --execute";

pub fn command() -> BasicCommand {
    BasicCommand::new("punch")
        .with_short_help("punch your shell")
        .with_long_help(LONG_HELP)
        .on_execute(|args, _stdin| {
            if args.len() == 1 && args[0] == "--execute" {
                println!("{}", style("POW!").bold());
                return true;
            }
            false
        })
}
