//! Command-line interface orchestration for the minigraph fixture generator.
//!
//! The CLI offers a `generate` command that samples a random graph and writes
//! its edge list, and a `check` command that re-reads an edge list and
//! verifies the format's invariants.

mod commands;

pub use commands::{
    CheckArgs, CheckSummary, Cli, CliError, Command, CommandSummary, GenerateArgs, render_summary,
    run_cli,
};

#[cfg(test)]
mod tests;
