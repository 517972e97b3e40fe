//! Command-line argument definitions for the regrid CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, preview rendering and logging verbosity.

use clap::Parser;

/// Transpose a grid of shapes: rows become columns and columns become rows
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input scene file (TOML)
    #[arg(help = "Path to the input scene file")]
    pub input: String,

    /// Path to the output scene file (TOML)
    #[arg(short, long, default_value = "out.toml")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Compute and log the new layout without writing the output scene
    #[arg(long)]
    pub dry_run: bool,

    /// Render the resulting scene to this SVG file
    #[arg(long)]
    pub preview: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
