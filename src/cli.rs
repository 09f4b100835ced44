use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ptmark")]
#[command(author, version, about = "Create bar/tempo markers in a Pro Tools session")]
pub struct Cli {
    /// Process bar data (required, the beat format is no longer supported)
    #[arg(long)]
    pub bars: bool,

    /// JSON data containing bars (JSON string or file path)
    pub json_data: String,

    /// Starting timecode (HH:MM:SS:FF)
    pub start_timecode: String,

    /// Clear existing markers (not supported by PTSL, logged only)
    #[arg(long)]
    pub clear: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
