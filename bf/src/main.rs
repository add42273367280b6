mod commands;
mod reports;

use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env(/* RUST_LOG sets the level */))
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    Cli::parse_or_exit().run()
}
