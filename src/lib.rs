//! cmdtree: nested command dispatch
//!
//! Register a tree of commands once, then resolve an argument vector to the
//! deepest command it names. That command runs with whatever arguments are
//! left; if it declines, its help and an aligned listing of its subcommands
//! are printed instead.
//!
//! ```
//! use std::io;
//! use std::rc::Rc;
//! use cmdtree::cmd::{BasicCommand, RootCommand};
//! use cmdtree::core::{Driver, Env};
//!
//! let root = RootCommand::new("Usage: demo COMMAND")
//!     .sub_command(Rc::new(BasicCommand::new("hello").with_short_help("say hello")));
//!
//! let env = Env::process()
//!     .with_args(["demo"])
//!     .with_stdin(io::empty())
//!     .with_stdout(Vec::new());
//! let mut driver = Driver::with_env(env);
//! driver.register_root(Rc::new(root)).unwrap();
//! driver.parse_input().unwrap();
//!
//! let out = String::from_utf8(driver.into_env().stdout).unwrap();
//! assert_eq!(out, "Usage: demo COMMAND\n\nCommands:\n    hello - say hello\n");
//! ```

pub mod cli;
pub mod cmd;
pub mod core;
