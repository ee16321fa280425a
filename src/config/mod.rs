//! Application Configuration
//!
//! User settings and window geometry stored in TOML format.
//! The note text itself is not part of the config; it lives in the preference store.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Profile shown in the dashboard sidebar
    pub profile: ProfileConfig,
    /// Dashboard window settings
    pub dashboard: DashboardSettings,
    /// HUD window settings
    pub overlay: OverlaySettings,
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log filter used when `RUST_LOG` is not set (e.g. "info", "dupely=debug")
    pub log_level: String,
    /// Open the HUD as soon as the dashboard starts
    pub show_hud_on_launch: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_hud_on_launch: false,
        }
    }
}

/// User profile displayed on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub user_name: String,
    pub user_bio: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user_name: "Nathaniel Islas".to_string(),
            user_bio: "Building Dupely - The smart meeting overlay.".to_string(),
        }
    }
}

impl ProfileConfig {
    /// First word of the user name, used in the greeting
    pub fn first_name(&self) -> &str {
        self.user_name.split_whitespace().next().unwrap_or("")
    }
}

/// Dashboard window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Initial window size (width, height)
    pub size: (f32, f32),
    /// Minimum window size (width, height)
    pub min_size: (f32, f32),
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            size: (800.0, 520.0),
            min_size: (600.0, 400.0),
        }
    }
}

/// HUD window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Top-left position of the HUD when it is first created
    pub position: (f32, f32),
    /// Initial HUD size (width, height)
    pub size: (f32, f32),
    /// Minimum HUD size (width, height)
    pub min_size: (f32, f32),
    /// Global hotkey that toggles the HUD (e.g. "Ctrl+Shift+H"); empty disables it
    pub toggle_hotkey: String,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            position: (100.0, 100.0),
            size: (450.0, 350.0),
            min_size: (300.0, 200.0),
            toggle_hotkey: "Ctrl+Shift+H".to_string(),
        }
    }
}

impl OverlaySettings {
    /// The configured hotkey, if one is set
    pub fn hotkey(&self) -> Option<&str> {
        let trimmed = self.toggle_hotkey.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
