//! Command registration and dispatch

use std::io::{Read, Stdin, Stdout, Write};
use std::rc::Rc;

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

use crate::core::command::Command;
use crate::core::env::Env;
use crate::core::help::render_help;
use crate::core::tree::{CommandTree, NodeId};

/// Errors returned by the driver API
///
/// A command returning `false` from `execute` is not one of these; it only
/// causes help to be printed.
#[derive(Debug, Error, Diagnostic)]
pub enum DriverError {
    #[error("root command doesn't exist. call register_root first")]
    #[diagnostic(code(cmdtree::driver::no_root))]
    NoRoot,

    #[error("register_root already called")]
    #[diagnostic(
        code(cmdtree::driver::already_registered),
        help("a driver holds exactly one tree; create a new driver to register another")
    )]
    AlreadyRegistered,

    #[error("root command name must be \"\", got {name:?}")]
    #[diagnostic(code(cmdtree::driver::named_root))]
    NamedRoot { name: String },

    #[error("command path {path} already exists")]
    #[diagnostic(
        code(cmdtree::driver::duplicate_path),
        help("sibling commands must have distinct names")
    )]
    DuplicatePath { path: String },

    #[error("command tree is unusable: registration failed at {path}")]
    #[diagnostic(code(cmdtree::driver::unusable))]
    Unusable { path: String },

    #[error("command tree is inconsistent: {0}")]
    #[diagnostic(code(cmdtree::driver::corrupt))]
    Corrupt(String),

    #[error("failed to write help: {0}")]
    #[diagnostic(code(cmdtree::driver::io))]
    Io(#[from] std::io::Error),
}

#[derive(Debug)]
enum State {
    Unregistered,
    /// `register_root` was called with an unacceptable root
    Rejected,
    Ready(CommandTree),
    /// Registration hit a structural error at this path
    Failed(String),
}

impl State {
    fn tree(&self) -> Result<&CommandTree, DriverError> {
        match self {
            State::Ready(tree) => Ok(tree),
            State::Unregistered | State::Rejected => Err(DriverError::NoRoot),
            State::Failed(path) => Err(DriverError::Unusable { path: path.clone() }),
        }
    }
}

/// Owns a command tree and dispatches invocations into it
#[derive(Debug)]
pub struct Driver<R = Stdin, W = Stdout> {
    env: Env<R, W>,
    state: State,
}

impl Driver {
    /// A driver bound to the real process arguments, stdin and stdout
    pub fn new() -> Self {
        Self::with_env(Env::process())
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Read, W: Write> Driver<R, W> {
    /// A driver bound to an injected environment
    pub fn with_env(env: Env<R, W>) -> Self {
        Self {
            env,
            state: State::Unregistered,
        }
    }

    /// Validate and index the tree rooted at `root`
    ///
    /// May be called once per driver, whatever the outcome of that call. The
    /// root must be named `""` and sibling names must be unique. If any node
    /// collides, nothing is registered and the driver refuses to dispatch from
    /// then on.
    pub fn register_root(&mut self, root: Rc<dyn Command>) -> Result<(), DriverError> {
        if !matches!(self.state, State::Unregistered) {
            return Err(DriverError::AlreadyRegistered);
        }

        if !root.name().is_empty() {
            self.state = State::Rejected;
            return Err(DriverError::NamedRoot {
                name: root.name().to_string(),
            });
        }

        match CommandTree::build(root) {
            Ok(tree) => {
                debug!(commands = tree.len(), "registered command tree");
                self.state = State::Ready(tree);
                Ok(())
            }
            Err(err) => {
                let path = match &err {
                    DriverError::DuplicatePath { path } => path.clone(),
                    other => other.to_string(),
                };
                debug!(%path, "command tree registration failed");
                self.state = State::Failed(path);
                Err(err)
            }
        }
    }

    /// Whether a tree has been registered successfully
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// The registered tree
    pub fn tree(&self) -> Result<&CommandTree, DriverError> {
        self.state.tree()
    }

    /// Resolve `tokens` (program name excluded) to the deepest matching
    /// command without executing it
    pub fn resolve<'a>(&self, tokens: &'a [String]) -> Result<(NodeId, &'a [String]), DriverError> {
        self.tree()?.resolve(tokens)
    }

    /// Resolve the environment's arguments and execute the matched command
    ///
    /// When the command declines, its help is written to the output sink and
    /// this still returns `Ok`.
    pub fn parse_input(&mut self) -> Result<(), DriverError> {
        let tree = self.state.tree()?;

        let (tokens, stdin, stdout) = self.env.split_mut();
        let (id, rest) = tree.resolve(tokens)?;
        let node = tree.node(id)?;

        debug!(path = %node.path(), args = ?rest, "dispatching");
        if node.command().execute(rest, stdin) {
            return Ok(());
        }

        debug!(path = %node.path(), "command declined, printing help");
        render_help(stdout, tree, node)?;
        stdout.flush()?;
        Ok(())
    }

    /// The injected output sink
    pub fn stdout(&self) -> &W {
        &self.env.stdout
    }

    /// Give back the injected environment
    pub fn into_env(self) -> Env<R, W> {
        self.env
    }
}
