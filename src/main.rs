//! netsearch - find Meraki networks by name and export them to CSV

use clap::Parser;
use colored::Colorize;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod search;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = cli::search::run(&cli).await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

/// Log to stderr at `warn`, or `debug` with `--debug`; `RUST_LOG` wins.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
