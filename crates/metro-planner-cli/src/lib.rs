//! Metro planner CLI library.
//!
//! This crate provides the subcommand handlers, terminal styling and output
//! formatting used by the `metro-planner` binary.

pub mod commands;
pub mod output;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_helpers;
