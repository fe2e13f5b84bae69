//! Subcommand implementations

pub mod graph;
pub mod solve;
pub mod struggles;
pub mod symmetry;
