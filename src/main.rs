use anyhow::{Context, Result};
use kanban_tui::{
    config::{ConfigError, GlobalConfig},
    logging,
    tui::{App, CrosstermEvents},
};
use std::path::PathBuf;
use tracing::{info, warn};

const USAGE: &str = "Usage: kanban [--config <path>]

Keys:
  left/h, right/l   focus previous/next column
  up/k, down/j      select task
  /                 filter the focused column
  enter             advance the selected task
  n                 new task
  q, ctrl+c         quit";

fn main() -> Result<()> {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config_path: Option<PathBuf> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            "-V" | "--version" => {
                println!("kanban {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "-c" | "--config" => {
                let path = iter.next().context("--config requires a path")?;
                config_path = Some(PathBuf::from(path));
            }
            other => anyhow::bail!("unknown argument '{}'\n\n{}", other, USAGE),
        }
    }

    // Load config, falling back to defaults so a broken file never blocks startup
    let (config, config_error) = match &config_path {
        Some(path) => split_config(GlobalConfig::load_from(path)),
        None => split_config(GlobalConfig::load()),
    };

    // Logging goes to a file; the guard must outlive the app
    let _log_guard = GlobalConfig::data_dir()
        .ok()
        .and_then(|dir| logging::init(&dir, &config.log));
    if let Some(err) = config_error {
        let message = format!("{:#}", err);
        warn!(error = %message, "invalid config, using defaults");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    // Initialize and run the app
    let mut app = App::new(&config)?;
    let result = app.run(&mut CrosstermEvents::new());
    // Restore the terminal before any error is printed
    drop(app);

    match &result {
        Ok(()) => info!("clean exit"),
        Err(err) => tracing::error!(error = %err, "event loop failed"),
    }
    result
}

fn split_config(loaded: Result<GlobalConfig, ConfigError>) -> (GlobalConfig, Option<anyhow::Error>) {
    match loaded {
        Ok(config) => (config, None),
        Err(err) => (GlobalConfig::default(), Some(err.into())),
    }
}
