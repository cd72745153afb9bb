use crate::config::DEFAULT_RELEASE_ENDPOINT;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hypertremolo-install")]
#[command(about = "Download and install HyperTremolo")]
pub struct Cli {
    /// Releases API endpoint URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_RELEASE_ENDPOINT)]
    pub release_endpoint: String,

    /// Installation prefix path
    #[arg(long, value_name = "PATH")]
    pub prefix: Option<PathBuf>,

    /// Install under user directory (default)
    #[arg(short = 'U', long, conflicts_with = "global")]
    pub user: bool,

    /// Install under system directory
    #[arg(short = 'G', long)]
    pub global: bool,

    /// Install standalone
    #[arg(long, conflicts_with = "vst3")]
    pub standalone: bool,

    /// Install VST3 (default)
    #[arg(long)]
    pub vst3: bool,

    /// Version number
    #[arg(short = 'V', long, value_name = "X.Y.Z")]
    pub version: Option<String>,

    /// List available releases and quit
    #[arg(long, conflicts_with = "uninstall")]
    pub list: bool,

    /// Uninstall the software
    #[arg(long)]
    pub uninstall: bool,

    /// Log debug messages too (use twice for trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Log only error messages
    #[arg(short, long)]
    pub quiet: bool,
}
