//! Ready-made [`Command`](crate::core::Command) implementations

pub mod basic;
pub mod root;

pub use basic::{BasicCommand, ExecuteFn};
pub use root::RootCommand;
