//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Build an evidence-backed persona report from a Reddit user's public posts and comments.
#[derive(Parser, Debug)]
#[command(name = "reddit-persona")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Reddit profile URL, e.g. https://www.reddit.com/user/kojied/
    pub profile_url: String,

    /// Report file name (default: {username}_persona.txt in the output directory)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Maximum number of posts and comments to analyze
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Read a saved listing JSON instead of fetching from Reddit
    #[arg(long, value_name = "LISTING.json")]
    pub input: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter when RUST_LOG is unset.
    pub fn log_filter(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "info",
            (false, 1) => "debug",
            _ => "trace",
        }
    }
}
