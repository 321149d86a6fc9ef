use std::path::PathBuf;

use clap::Parser;

/// tonemark: generate the editor script that carries a note type's tone
/// colors into the editor web view.
#[derive(Parser, Debug)]
#[command(name = "tonemark", version, about)]
pub struct Args {
    /// Note type stylesheet to read (stdin when omitted).
    #[arg(long)]
    pub css: Option<PathBuf>,

    /// Host version to generate for (overrides the config file).
    #[arg(long)]
    pub host_version: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Explicit field root selector; repeat for several roots. Legacy hosts only.
    #[arg(long = "root")]
    pub roots: Vec<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
