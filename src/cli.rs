use crate::fetcher::{DEFAULT_MAX_REDIRECTS as FETCH_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS};
use clap::Parser;

pub const DEFAULT_OUTPUT: &str = "text";
pub const DEFAULT_TIMEOUT: u64 = DEFAULT_TIMEOUT_SECS;
pub const DEFAULT_MAX_REDIRECTS: usize = FETCH_MAX_REDIRECTS;

#[derive(Parser, Debug, Clone)]
#[command(name = "seolens")]
#[command(about = "Fetch a web page and report on its SEO quality", long_about = None)]
pub struct Cli {
    /// The URL to analyze (https:// is assumed when no scheme is given)
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output format: text or json
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Save JSON report to file
    #[arg(short, long)]
    pub save: Option<String>,

    /// Request timeout in seconds (default: 30)
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT)]
    pub timeout: u64,

    /// Maximum number of redirects to follow (default: 5)
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file (JSON, TOML, or YAML)
    #[arg(long)]
    pub config: Option<String>,
}
