// tuneshell - terminal media-player shell
// Sidebar with two collapsible sub-menus, one swappable content view

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tuneshell::{config::Config, logging, ui::App, ViewKind};

#[derive(Parser)]
#[command(name = "tuneshell")]
#[command(about = "A terminal media-player shell with collapsible navigation menus")]
struct Args {
    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Open a view on start-up
    #[arg(long, value_enum, value_name = "VIEW")]
    open: Option<ViewKind>,

    /// Enable developer logging (debug output for tuneshell)
    #[arg(long)]
    dev: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load config - falls back to defaults if missing
    let config = match &args.config {
        Some(path) => Config::load_or_create(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let _log_guard = logging::init_logging(&config.logging.directory, args.dev)
        .context("initialising logging")?;
    info!("tuneshell starting up");

    let mut app = App::new(config, args.open).context("setting up the terminal")?;
    let result = app.run().await;
    // Restore the terminal before anything gets printed
    drop(app);

    if let Err(e) = &result {
        error!("event loop failed: {}", e);
    }
    result.context("running the shell")?;

    info!("tuneshell shut down cleanly");
    Ok(())
}
