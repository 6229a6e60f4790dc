//! Help text shown when a command declines to execute

use std::io::Write;

use crate::core::driver::DriverError;
use crate::core::tree::{CommandTree, Node};

/// Indentation in front of each listed subcommand
const LISTING_INDENT: &str = "    ";

/// Write `node`'s long help followed by a listing of its direct subcommands
///
/// The listing is omitted entirely, blank line and header included, when the
/// node has no subcommands. Names are padded to the widest sibling name
/// recorded for this node at registration.
pub fn render_help<W: Write + ?Sized>(
    out: &mut W,
    tree: &CommandTree,
    node: &Node,
) -> Result<(), DriverError> {
    writeln!(out, "{}", node.command().long_help())?;

    if node.children().is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Commands:")?;

    let width = node.longest_sub_command();
    for &child in node.children() {
        let sub = tree.node(child)?.command();
        writeln!(
            out,
            "{}{:<width$} - {}",
            LISTING_INDENT,
            sub.name(),
            single_line(sub.short_help()),
            width = width
        )?;
    }

    Ok(())
}

/// Remove newline characters without substituting anything for them
pub fn single_line(text: &str) -> String {
    text.replace('\n', "")
}
