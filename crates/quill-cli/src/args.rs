//! Command-line argument definitions for the Quill CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, output format,
//! configuration file selection, and logging verbosity.

use clap::Parser;

use quill::config::OutputFormat;

/// Command-line arguments for the Quill renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input scene file (JSON)
    #[arg(help = "Path to the input scene file")]
    pub input: String,

    /// Output path, or `-` for stdout.
    ///
    /// Defaults to `out.svg` for SVG output and stdout for text output.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (svg, text); overrides the configuration file
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Arguments for rendering `input` with every option left at its default.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: None,
            format: None,
            config: None,
            log_level: "info".to_string(),
        }
    }
}
