//! retag - batch-retag container images
//!
//! This is the CLI entry point for retag.

use clap::Parser;
use retag::batch::{Retagger, RunConfig};
use retag::error::Result;
use retag::runtime::{CliRuntime, DryRunRuntime, DEFAULT_RUNTIME};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// retag - pull, retag and push a list of container images
#[derive(Parser)]
#[command(name = "retag")]
#[command(author = "Evoker Industries")]
#[command(version)]
#[command(about = "Pull a list of images at one tag and push them under another", long_about = None)]
struct Cli {
    /// Path to the list of images to tag
    #[arg(long, default_value = "")]
    list: String,

    /// The image tag to pull
    #[arg(long, default_value = "")]
    pull_tag: String,

    /// The tag to apply to the pulled images
    #[arg(long, default_value = "")]
    tag: String,

    /// The registry to pull the images from
    #[arg(long, default_value = "")]
    registry: String,

    /// Container runtime binary
    #[arg(long, env = "RETAG_RUNTIME", default_value = DEFAULT_RUNTIME)]
    runtime: PathBuf,

    /// Print the runtime commands instead of running them
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig::new(&self.list, &self.pull_tag, &self.tag).registry(&self.registry)
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.run_config();

    if cli.dry_run {
        Retagger::new(config, DryRunRuntime::new(&cli.runtime)).run()?;
    } else {
        Retagger::new(config, CliRuntime::new(&cli.runtime)).run()?;
    }

    Ok(())
}
