//! AcceptMe - terminal client for League of Legends lobby auto-accept
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use acceptme_app::config::{self, Settings};
use acceptme_bridge::{BackendHandle, BridgeClient, MemoryBackend, ProcessBackend, ProcessConfig};
use acceptme_core::Error;
use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;

/// AcceptMe - League of Legends lobby auto-accept
#[derive(Parser, Debug)]
#[command(name = "acceptme")]
#[command(about = "Auto-accept League of Legends queue pops and automate champion select", long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Backend executable, overrides `[backend] command`
    #[arg(long, value_name = "CMD")]
    backend: Option<String>,

    /// Use the in-memory demo backend instead of a real one
    #[arg(long, conflicts_with = "backend")]
    offline: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(config::default_config_path);

    if args.init_config {
        if config::init_config(&config_path)? {
            println!("Wrote {}", config_path.display());
        } else {
            println!("{} already exists", config_path.display());
        }
        return Ok(());
    }

    acceptme_core::logging::init()?;

    let settings = config::load_settings(&config_path);
    let client = BridgeClient::new(connect_backend(&args, &settings)?);
    info!("Using {} backend", client.backend_name());

    acceptme_tui::run(settings, client).await?;
    Ok(())
}

fn connect_backend(args: &Args, settings: &Settings) -> acceptme_core::Result<BackendHandle> {
    if args.offline {
        return Ok(BackendHandle::memory(MemoryBackend::new()));
    }

    let command = args
        .backend
        .clone()
        .or_else(|| settings.backend.command.clone())
        .ok_or(Error::BackendNotConfigured)?;

    let process_config = ProcessConfig::new(command)
        .with_args(settings.backend.args.clone())
        .with_timeout(settings.backend.request_timeout());
    Ok(BackendHandle::process(ProcessBackend::spawn(&process_config)?))
}
