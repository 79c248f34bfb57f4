//! CLI definition

use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;

pub mod search;
pub mod select;

/// Search the networks of a Meraki organization by name and export matches to CSV
#[derive(Parser, Debug)]
#[command(name = "netsearch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Case-insensitive text to look for in network names [default: abc]
    #[arg(short, long = "search", env = "NETSEARCH_TERM", hide_env = true)]
    pub search: Option<String>,

    /// File the matching networks are written to [default: networks.csv]
    #[arg(short, long, env = "NETSEARCH_OUTPUT", hide_env = true)]
    pub output: Option<PathBuf>,

    /// Organization index from the listing; skips the prompt
    #[arg(long, env = "NETSEARCH_ORG_INDEX", hide_env = true)]
    pub org_index: Option<usize>,

    /// Dashboard API key
    #[arg(long, env = "MERAKI_DASHBOARD_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Dashboard API base URL [default: https://api.meraki.com/api/v1/]
    #[arg(long, env = "MERAKI_BASE_URL", hide_env = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds [default: 3]
    #[arg(long, env = "NETSEARCH_TIMEOUT", hide_env = true)]
    pub timeout: Option<u64>,

    /// Override config file location
    #[arg(long, env = "NETSEARCH_CONFIG", hide_env = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, env = "NETSEARCH_DEBUG", hide_env = true)]
    pub debug: bool,
}

impl Cli {
    /// The flag/environment layer of the configuration
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            search_term: self.search.clone(),
            output: self.output.clone(),
            timeout_secs: self.timeout,
        }
    }
}
