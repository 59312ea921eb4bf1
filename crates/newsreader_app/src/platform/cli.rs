use std::path::PathBuf;

use clap::Parser;

/// Browse Hacker News from the terminal.
#[derive(Debug, Default, Parser)]
#[command(name = "newsreader", version, about)]
pub struct Cli {
    /// RON config file; flags given here take precedence over it.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Search endpoint.
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Seconds between front page refreshes.
    #[arg(long, value_name = "SECS")]
    pub refresh_secs: Option<u64>,

    /// Give up on a request after this many seconds (default: wait indefinitely).
    #[arg(long, value_name = "SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Log file; the terminal itself is used by the UI.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// One of off, error, warn, info, debug, trace.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
