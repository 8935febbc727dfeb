use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "distill-page")]
#[command(about = "Fetches a web page and distills it into a structured JSON summary")]
#[command(version)]
pub struct Args {
    /// URL of the page to scrape
    pub url: String,

    /// Fetch timeout in seconds; overrides any config file value [default: 15]
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Directory to store a timestamped copy of the report in
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Path of a file mirroring the most recent report
    #[arg(long)]
    pub latest: Option<PathBuf>,

    /// Pretty-print the JSON written to stdout
    #[arg(short, long)]
    pub pretty: bool,

    /// JSON configuration file (timeout, user agent, extractor caps)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
