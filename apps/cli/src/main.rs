//! docshard CLI — shard large markdown documents into navigable pieces.
//!
//! Partitions a structured document into an intro plus per-section files
//! with a generated `index.md`, preserving fenced code blocks verbatim.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
