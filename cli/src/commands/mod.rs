//! CLI command implementations
//!
//! Each command module implements a specific mapgen CLI command.

pub mod check;
pub mod generate;
