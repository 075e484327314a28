//! Subcommand implementations.

pub mod call;
pub mod check;
pub mod data;
