//! `ninja kick` - a hand-written `Command` that parses its own flags

use std::io::Read;

use clap::Parser;
use console::style;
use tracing::debug;

use crate::core::Command;

const LONG_HELP: &str = "kick your shell with the power of one supernova

Usage: kick [OPTIONS]

Options:
  --execute";

#[derive(Parser, Debug)]
#[command(name = "kick", no_binary_name = true, disable_help_flag = true)]
struct KickArgs {
    #[arg(long)]
    execute: bool,
}

#[derive(Debug, Default)]
pub struct KickCommand;

impl Command for KickCommand {
    fn name(&self) -> &str {
        "kick"
    }

    fn short_help(&self) -> &str {
        "kick your shell"
    }

    fn long_help(&self) -> &str {
        LONG_HELP
    }

    // Return false if this command wasn't correctly invoked so the driver
    // prints LONG_HELP
    fn execute(&self, args: &[String], _stdin: &mut dyn Read) -> bool {
        match KickArgs::try_parse_from(args) {
            Ok(KickArgs { execute: true }) => {
                println!("{}", style("BOOM!").bold());
                true
            }
            Ok(_) => false,
            Err(e) => {
                debug!(error = %e, "kick arguments rejected");
                false
            }
        }
    }
}
