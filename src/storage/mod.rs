//! Storage Layer
//!
//! Handles persistence of the note text in a small SQLite key-value store,
//! and resolves the platform directories for data and configuration.

pub mod database;
pub mod notes;

pub use database::PreferenceStore;
pub use notes::NoteStore;

use anyhow::Result;
use std::path::PathBuf;

/// File name of the preference database inside the data directory
pub const DATABASE_FILE: &str = "preferences.db";

/// File name of the configuration inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("app", "dupely", "Dupely")
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

/// Get the application data directory
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = project_dirs()?.data_dir().to_path_buf();
    std::fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = project_dirs()?.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}
