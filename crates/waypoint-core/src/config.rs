//! Application configuration.
//!
//! Configuration is an optional JSON file. Without an explicit path the
//! file is looked up as `$XDG_CONFIG_HOME/waypoint/config.json`; a missing
//! file means defaults. Every key is optional:
//!
//! ```json
//! {
//!   "plans_dir": "/home/me/plans",
//!   "behind_tolerance": 10.0,
//!   "significant_delay_days": 7,
//!   "catalog": [
//!     { "portfolio": "Portfolio A", "sub_portfolio": "Sub-Portfolio 1", "project": "Project 1" }
//!   ]
//! }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Catalog, CatalogEntry},
    error::{FileResultExt, Result, WaypointError},
    schedule::AnalysisSettings,
};

const APP_PREFIX: &str = "waypoint";
const CONFIG_FILE: &str = "config.json";

/// Settings read from the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory where downloaded plans are suggested
    pub plans_dir: Option<PathBuf>,

    /// See [`AnalysisSettings::behind_tolerance`]
    pub behind_tolerance: f64,

    /// See [`AnalysisSettings::significant_delay_days`]
    pub significant_delay_days: i64,

    /// Projects offered during dependency intake
    pub catalog: Vec<CatalogEntry>,
}

impl Default for Config {
    fn default() -> Self {
        let settings = AnalysisSettings::default();
        Self {
            plans_dir: None,
            behind_tolerance: settings.behind_tolerance,
            significant_delay_days: settings.significant_delay_days,
            catalog: Catalog::sample_entries(),
        }
    }
}

impl Config {
    /// Loads the configuration from `path`, or from the XDG location when no
    /// path is given.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::FileSystem` if an explicit file cannot be
    /// read, `WaypointError::Serialization` for malformed JSON and
    /// `WaypointError::Configuration` for out-of-range values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_config_path() {
                Some(path) => Self::from_file(&path),
                None => {
                    debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Reads and validates a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).fs_context(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.behind_tolerance.is_finite() || self.behind_tolerance < 0.0 {
            return Err(WaypointError::Configuration {
                message: format!(
                    "behind_tolerance must be a non-negative number, got {}",
                    self.behind_tolerance
                ),
            });
        }
        if self.significant_delay_days < 0 {
            return Err(WaypointError::Configuration {
                message: format!(
                    "significant_delay_days must not be negative, got {}",
                    self.significant_delay_days
                ),
            });
        }
        Ok(())
    }

    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX).find_config_file(CONFIG_FILE)
    }

    /// Analyzer thresholds from this configuration.
    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            behind_tolerance: self.behind_tolerance,
            significant_delay_days: self.significant_delay_days,
        }
    }

    /// Dependency catalog from this configuration.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.catalog.clone())
    }

    /// Directory for downloaded plans.
    ///
    /// If not configured, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waypoint/plans` or `~/.local/share/waypoint/plans`
    pub fn plans_dir(&self) -> Result<PathBuf> {
        match &self.plans_dir {
            Some(dir) => Ok(dir.clone()),
            None => xdg::BaseDirectories::with_prefix(APP_PREFIX)
                .create_data_directory("plans")
                .map_err(|e| WaypointError::XdgDirectory(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "significant_delay_days": 3 }"#).expect("Failed to write config");

        let config = Config::load(Some(&path)).expect("Failed to load config");
        assert_eq!(config.significant_delay_days, 3);
        assert_eq!(config.behind_tolerance, 10.0);
        assert_eq!(config.catalog, Catalog::sample_entries());
        assert_eq!(config.analysis_settings().significant_delay_days, 3);
    }

    #[test]
    fn test_custom_catalog_and_plans_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "plans_dir": "/tmp/plans",
                "catalog": [{ "portfolio": "Ops", "sub_portfolio": "Infra", "project": "DC move" }]
            }"#,
        )
        .expect("Failed to write config");

        let config = Config::load(Some(&path)).expect("Failed to load config");
        assert_eq!(config.catalog().portfolios(), vec!["Ops"]);
        assert_eq!(
            config.plans_dir().expect("plans dir"),
            PathBuf::from("/tmp/plans")
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.json");

        fs::write(&path, r#"{ "behind_tolerance": -1 }"#).expect("Failed to write config");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(WaypointError::Configuration { .. })
        ));

        fs::write(&path, "not json").expect("Failed to write config");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(WaypointError::Serialization { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let result = Config::load(Some(&temp_dir.path().join("absent.json")));
        assert!(matches!(result, Err(WaypointError::FileSystem { .. })));
    }
}
