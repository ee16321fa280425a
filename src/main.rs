//! Dupely - heads-up meeting notes
//!
//! A dashboard window with a button that toggles a floating, translucent notes
//! panel (the HUD). The HUD stays above other applications, follows every
//! desktop, and never takes focus from the app you are presenting in.

mod config;
mod dashboard;
mod hotkey;
mod overlay;
mod shared;
mod storage;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::AppConfig;
use crate::overlay::{SurfaceGeometry, ViewportSurface};
use crate::shared::{AppPaths, AppState, Intent};
use crate::storage::{NoteStore, PreferenceStore};

/// Dupely - floating heads-up notes for your meetings
#[derive(Parser, Debug)]
#[command(name = "dupely", version)]
#[command(about = "A floating notes panel that stays on top of your meeting")]
struct Args {
    /// Path to the configuration file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Open the HUD immediately
    #[arg(long)]
    show_hud: bool,

    /// Log filter, e.g. "debug" or "dupely=trace" (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,
}

/// Where the configuration came from, reported once logging is up
enum ConfigSource {
    Loaded(PathBuf),
    Created(PathBuf),
    Defaults(String),
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args
        .config
        .clone()
        .or_else(|| storage::get_config_dir().ok().map(|d| d.join(storage::CONFIG_FILE)));
    let (config, source) = load_or_create_config(config_path.as_deref());

    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.general.log_level.clone());
    init_logging(&log_level)?;

    match source {
        ConfigSource::Loaded(path) => info!("Loaded configuration from {:?}", path),
        ConfigSource::Created(path) => info!("Wrote default configuration to {:?}", path),
        ConfigSource::Defaults(reason) => warn!("Using default configuration: {}", reason),
    }

    info!("Dupely starting...");

    let (store, database) = open_store()?;
    let paths = AppPaths {
        config_file: config_path,
        database,
    };

    let surface = ViewportSurface::new(SurfaceGeometry::from(&config.overlay));
    let show_hud = args.show_hud || config.general.show_hud_on_launch;
    let mut state = AppState::new(config, paths, surface, NoteStore::new(store));

    if show_hud {
        state.apply(Intent::ShowHud);
    }

    dashboard::app::run_dashboard(state)
        .map_err(|e| anyhow::anyhow!("Dashboard error: {}", e))?;

    info!("Dupely shutdown complete");

    Ok(())
}

/// Initialize tracing; `RUST_LOG` wins over `default_filter`
fn init_logging(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Load configuration from file, writing the defaults on first run
fn load_or_create_config(path: Option<&Path>) -> (AppConfig, ConfigSource) {
    let Some(path) = path else {
        return (
            AppConfig::default(),
            ConfigSource::Defaults("no configuration directory".to_string()),
        );
    };

    if path.exists() {
        return match config::load_config(path) {
            Ok(config) => (config, ConfigSource::Loaded(path.to_path_buf())),
            Err(e) => (
                AppConfig::default(),
                ConfigSource::Defaults(format!("{:?} is invalid: {}", path, e)),
            ),
        };
    }

    let config = AppConfig::default();
    match config::save_config(&config, path) {
        Ok(()) => (config, ConfigSource::Created(path.to_path_buf())),
        Err(e) => (
            config,
            ConfigSource::Defaults(format!("could not write {:?}: {}", path, e)),
        ),
    }
}

/// Open the on-disk preference store, falling back to memory so the HUD still works
fn open_store() -> Result<(PreferenceStore, Option<PathBuf>)> {
    let on_disk = storage::get_data_dir()
        .map(|dir| dir.join(storage::DATABASE_FILE))
        .and_then(|path| Ok((PreferenceStore::open(&path)?, path)));

    match on_disk {
        Ok((store, path)) => {
            info!("Notes stored in {:?}", path);
            Ok((store, Some(path)))
        }
        Err(e) => {
            warn!("Note storage unavailable, notes will not be saved: {}", e);
            let store = PreferenceStore::open_in_memory()
                .context("Failed to open in-memory preference store")?;
            Ok((store, None))
        }
    }
}
