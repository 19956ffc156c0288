//! Command-line surface: argument parsing, interactive menu, scripted demo.

use clap::{Parser, Subcommand};

/// Scripted demo walkthrough.
pub mod demo;
/// Interactive menu loop.
pub mod menu;
/// Console rendering helpers.
pub mod render;

/// Top-level argument surface for the `circulib` binary.
#[derive(Debug, Parser)]
#[command(name = "circulib")]
#[command(version)]
#[command(about = "In-memory library catalog with borrow/return rules")]
pub struct Cli {
    /// Subcommand to run; the interactive menu starts when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Seed a catalog and walk through every lending rule
    Demo {
        /// Print the final catalog state as pretty JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
