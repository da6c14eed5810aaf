use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use sumview::config::Config;
use sumview::{logging, ui};

#[derive(Parser)]
#[command(name = "sumview", version, about = "Terminal document preview with remote summarization")]
struct Cli {
    /// File to open on startup.
    path: Option<PathBuf>,

    /// Alternate configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    ui::run(config, cli.path).context("terminal session failed")?;
    Ok(())
}
