//! The outside world a driver runs against
//!
//! By default this is the real process: its arguments, standard input and
//! standard output. Tests swap any of the three for in-memory values.

use std::io::{self, Read, Stdin, Stdout, Write};

/// Arguments, input handle and output sink handed to a [`Driver`](crate::core::Driver)
#[derive(Debug)]
pub struct Env<R = Stdin, W = Stdout> {
    /// Full argument vector; index 0 is the program name
    pub args: Vec<String>,
    /// Passed unaltered to the executing command
    pub stdin: R,
    /// Where help text is written
    pub stdout: W,
}

impl Env {
    /// The real process environment
    pub fn process() -> Self {
        Self {
            args: std::env::args_os()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::process()
    }
}

impl<R: Read, W: Write> Env<R, W> {
    /// Replace the argument vector (program name included)
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the input handle
    pub fn with_stdin<R2: Read>(self, stdin: R2) -> Env<R2, W> {
        Env {
            args: self.args,
            stdin,
            stdout: self.stdout,
        }
    }

    /// Replace the output sink
    pub fn with_stdout<W2: Write>(self, stdout: W2) -> Env<R, W2> {
        Env {
            args: self.args,
            stdin: self.stdin,
            stdout,
        }
    }

    /// Tokens after the program name
    pub fn command_args(&self) -> &[String] {
        command_tokens(&self.args)
    }

    /// Command tokens, input handle and output sink borrowed separately
    pub fn split_mut(&mut self) -> (&[String], &mut R, &mut W) {
        (command_tokens(&self.args), &mut self.stdin, &mut self.stdout)
    }
}

// index 0 is the program name
fn command_tokens(args: &[String]) -> &[String] {
    args.get(1..).unwrap_or(&[])
}
