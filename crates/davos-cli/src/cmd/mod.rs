//! Subcommand implementations.

pub mod install;
pub mod kinds;
