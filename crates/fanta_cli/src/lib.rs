//! Fantacalcio roster CLI
//!
//! One subcommand per user gesture: each invocation restores the saved roster,
//! applies the command, saves, and prints the updated roster.

pub mod cli;
pub mod render;

pub use cli::{run, Cli, Command};
