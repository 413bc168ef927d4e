//! Startup configuration loading.
//!
//! Configuration is read once from a JSON file. It never changes the fixed
//! view-state defaults; it only parameterizes coordinators and the UI shell.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::state::DEFAULT_COLOR_MODE;

/// Viewport width (logical pixels) below which the mobile layout is used.
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 768.0;

/// Configuration for the view-state coordinators and the UI shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Widths strictly below this switch to the mobile layout
    pub mobile_breakpoint: f32,
    /// Color modes offered by the map color selector
    pub color_modes: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            color_modes: vec![DEFAULT_COLOR_MODE.to_string(), "margin".to_string()],
        }
    }
}

/// Loads and parses [`UiConfig`] values.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Parses a configuration from a JSON string. Missing keys take defaults.
    pub fn from_json_str(json: &str) -> Result<UiConfig> {
        serde_json::from_str(json).context("Invalid UI configuration JSON")
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<UiConfig> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::info!("Loaded UI configuration from {}", path.display());
        Ok(config)
    }

    /// Loads the configuration from `path` if given, falling back to defaults.
    ///
    /// A missing or invalid file is logged and replaced by the defaults.
    pub fn load_or_default(path: Option<&Path>) -> UiConfig {
        match path.map(Self::load) {
            Some(Ok(config)) => config,
            Some(Err(err)) => {
                log::warn!("{:#}; using default UI configuration", err);
                UiConfig::default()
            }
            None => UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SettingsCoordinator::from_json_str(r#"{"mobile_breakpoint": 600.0}"#).unwrap();
        assert_eq!(config.mobile_breakpoint, 600.0);
        assert_eq!(config.color_modes, vec!["winner".to_string(), "margin".to_string()]);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = SettingsCoordinator::from_json_str("{}").unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(SettingsCoordinator::from_json_str("{not json").is_err());
        assert!(SettingsCoordinator::from_json_str(r#"{"color_modes": 3}"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = env::temp_dir().join("votemap_settings_test.json");
        fs::write(&path, r#"{"color_modes": ["winner", "turnout", "swing"]}"#).unwrap();

        let config = SettingsCoordinator::load(&path).unwrap();
        assert_eq!(config.color_modes.len(), 3);
        assert_eq!(config.mobile_breakpoint, DEFAULT_MOBILE_BREAKPOINT);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = env::temp_dir().join("votemap_settings_missing.json");
        let _ = fs::remove_file(&path);
        assert!(SettingsCoordinator::load(&path).is_err());
        assert_eq!(SettingsCoordinator::load_or_default(Some(&path)), UiConfig::default());
        assert_eq!(SettingsCoordinator::load_or_default(None), UiConfig::default());
    }
}
