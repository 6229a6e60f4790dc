//! The command capability every node in a tree implements

use std::io::Read;
use std::rc::Rc;

/// A command that can be registered with a [`Driver`](crate::core::Driver)
///
/// The driver only ever talks to commands through these five methods. It never
/// inspects what a command does when executed.
pub trait Command {
    /// The name of the command, matched exactly against argument tokens
    ///
    /// The root of a tree must use the empty string.
    fn name(&self) -> &str;

    /// A one-line description shown in the parent's command listing
    ///
    /// Embedded newlines are removed before display.
    fn short_help(&self) -> &str;

    /// A multi-line description printed verbatim when execution declines
    fn long_help(&self) -> &str;

    /// Run the command with the arguments left after resolution
    ///
    /// Return `false` if the command can't execute with these arguments. The
    /// driver then prints this command's long help and subcommand listing.
    fn execute(&self, args: &[String], stdin: &mut dyn Read) -> bool;

    /// Direct subcommands, in the order they should be listed
    fn sub_commands(&self) -> &[Rc<dyn Command>] {
        &[]
    }
}

impl std::fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name())
            .field("sub_commands", &self.sub_commands().len())
            .finish()
    }
}
