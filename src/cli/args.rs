//! Defines the command-line arguments and subcommands for the glyphline CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "glyphline",
    version,
    about = "Grouped, width-aware, colorized progress rendering for test-run output."
)]
pub struct GlyphlineArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a stream of test outcome events from a file or stdin.
    Render {
        /// Event file to replay; reads stdin when omitted.
        file: Option<PathBuf>,

        #[command(flatten)]
        flags: RenderFlags,
    },
    /// Render a built-in demonstration stream.
    Sample {
        #[command(flatten)]
        flags: RenderFlags,
    },
    /// Show the configuration the renderer would use.
    Config {
        /// Configuration file to inspect instead of searching for one.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Flags shared by the rendering subcommands.
#[derive(Debug, Args)]
pub struct RenderFlags {
    /// Configuration file to use instead of searching for one.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Terminal width override in columns; 0 selects the built-in fallback.
    #[arg(long)]
    pub width: Option<usize>,

    /// Draw plain result codes instead of configured markers.
    #[arg(long)]
    pub simple: bool,

    /// Write one labeled outcome per line.
    #[arg(long)]
    pub debug: bool,

    /// Leave out group headers, as under a verbose runner.
    #[arg(long)]
    pub verbose: bool,

    /// Never render group headers.
    #[arg(long)]
    pub hide_headers: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}
