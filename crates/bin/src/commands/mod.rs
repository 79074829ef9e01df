//! Subcommand implementations.

pub mod component;
pub mod decompose;
