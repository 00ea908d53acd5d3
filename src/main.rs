// trustboard - main.rs
// Bootstrap: install the tracing subscriber, then dispatch the CLI.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trustboard::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    run(Cli::parse())
}
