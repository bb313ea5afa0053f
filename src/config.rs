//! Analysis settings.
//!
//! Settings are plain JSON. Every field has a default, so a settings file only
//! needs the values it wants to change:
//!
//! ```json
//! { "country_limit": 10, "reference_year": 2024 }
//! ```

use crate::error::{AnalyserError, Result, ResultExt as _};
use chrono::{Datelike as _, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of countries kept in the country distribution
    pub country_limit: usize,
    /// Number of leading genres tracked by the genre evolution view
    pub evolution_top_genres: usize,
    /// Earliest `date_added` year counted by yearly growth
    pub growth_start_year: i32,
    /// Earliest `date_added` year counted by genre evolution
    pub evolution_start_year: i32,
    /// Year content age is measured from. `None` means the current year.
    pub reference_year: Option<i32>,
    /// Duplicate share (percent of raw input) above which the health check flags it
    pub duplicate_warning_pct: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            country_limit: 15,
            evolution_top_genres: 8,
            growth_start_year: 2008,
            evolution_start_year: 2015,
            reference_year: None,
            duplicate_warning_pct: 5.0,
        }
    }
}

impl AnalysisSettings {
    pub fn effective_reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }
}

/// `<config dir>/content-analyser/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("content-analyser").join("settings.json"))
}

/// Loads settings from `path`, or from the default location when `path` is `None`.
///
/// A missing default file yields the defaults; a missing explicit file is an error.
///
/// # Errors
///
/// Returns an error if an explicit path does not exist, or if a settings file
/// cannot be read or parsed.
pub fn load_settings(path: Option<&Path>) -> Result<AnalysisSettings> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AnalyserError::InvalidPath(p.display().to_string()));
            }
            p.to_path_buf()
        }
        None => match default_settings_path() {
            Some(p) if p.exists() => p,
            _ => {
                log::debug!("No settings file found, using defaults");
                return Ok(AnalysisSettings::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    let settings: AnalysisSettings = serde_json::from_str(&content)
        .map_err(|e| AnalyserError::Config(format!("{}: {e}", path.display())))?;
    log::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Writes `settings` as pretty JSON, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_settings(settings: &AnalysisSettings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)?;
    Ok(())
}
