//! Command-line parsing for the registration metrics report.
//!
//! Every flag is optional: a bare `regmetrics` generates three years of data
//! ending today and prints the compact JSON report.

use std::path::PathBuf;

use clap::Parser;

use crate::logging::Verbosity;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "regmetrics",
    version,
    about = "Synthetic vehicle registration growth report (JSON on stdout)"
)]
pub struct Cli {
    /// Seed for the synthetic generator (falls back to REGMETRICS_SEED, then OS entropy).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pretty-print the JSON document.
    #[arg(long)]
    pub pretty: bool,

    /// Also write the JSON document to this file.
    #[arg(long, value_name = "JSON")]
    pub output: Option<PathBuf>,

    /// Log debug diagnostics to stderr.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}
