use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::memory::SortOrder;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Zoom and scroll behaviour of the timeline viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Zoom level when a viewport is created
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: f64,
    /// Lowest reachable zoom level
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f64,
    /// Highest reachable zoom level
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
    /// Amount added or removed by one zoom step
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,
    /// Fraction of the viewport width moved by one scroll step
    #[serde(default = "default_scroll_fraction")]
    pub scroll_fraction: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            initial_zoom: default_initial_zoom(),
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
            zoom_step: default_zoom_step(),
            scroll_fraction: default_scroll_fraction(),
        }
    }
}

impl TimelineConfig {
    /// Reject settings that would break the zoom bounds invariant
    pub fn validate(&self) -> crate::Result<()> {
        let finite = [
            self.initial_zoom,
            self.min_zoom,
            self.max_zoom,
            self.zoom_step,
            self.scroll_fraction,
        ]
        .iter()
        .all(|v| v.is_finite());

        if !finite {
            return Err(crate::Error::Config(
                "timeline settings must be finite numbers".to_string(),
            ));
        }
        if self.min_zoom <= 0.0 || self.min_zoom > self.max_zoom {
            return Err(crate::Error::Config(format!(
                "invalid zoom bounds: min_zoom={} max_zoom={}",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.initial_zoom < self.min_zoom || self.initial_zoom > self.max_zoom {
            return Err(crate::Error::Config(format!(
                "initial_zoom {} is outside [{}, {}]",
                self.initial_zoom, self.min_zoom, self.max_zoom
            )));
        }
        if self.zoom_step <= 0.0 {
            return Err(crate::Error::Config(format!(
                "zoom_step must be positive, got {}",
                self.zoom_step
            )));
        }
        if self.scroll_fraction <= 0.0 {
            return Err(crate::Error::Config(format!(
                "scroll_fraction must be positive, got {}",
                self.scroll_fraction
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Sort order used when none is given on the command line
    #[serde(default)]
    pub default_sort: SortOrder,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("keepsake")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_initial_zoom() -> f64 {
    1.0
}

fn default_min_zoom() -> f64 {
    0.5
}

fn default_max_zoom() -> f64 {
    5.0
}

fn default_zoom_step() -> f64 {
    0.5
}

fn default_scroll_fraction() -> f64 {
    0.3
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.timeline.validate()?;
        Ok(config)
    }

    /// Get the configuration file path
    /// Always uses ~/.config/keepsake/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("keepsake")
            .join("config.toml")
    }

    /// Get the database file path
    pub fn database_path(&self) -> PathBuf {
        self.data_dir().join("keepsake.db")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
