//! Core module - command tree registration, resolution and help

pub mod command;
pub mod driver;
pub mod env;
pub mod help;
pub mod tree;

pub use command::Command;
pub use driver::{Driver, DriverError};
pub use env::Env;
pub use help::render_help;
pub use tree::{CommandTree, Node, NodeId};
