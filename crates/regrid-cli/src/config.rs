//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).
//!
//! ```toml
//! [transpose]
//! horizontal_tolerance = 8.0
//! vertical_tolerance = 8.0
//! cluster_policy = "first-match"
//! anchor = "min-centers"
//!
//! [preview]
//! padding = 20.0
//! fill_color = "#dbe9f6"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use regrid::config::TransposeConfig;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Grid reconstruction settings.
    #[serde(default)]
    transpose: TransposeConfig,

    /// SVG preview styling.
    #[serde(default)]
    preview: PreviewConfig,
}

impl AppConfig {
    pub fn new(transpose: TransposeConfig, preview: PreviewConfig) -> Self {
        Self { transpose, preview }
    }

    pub fn transpose(&self) -> &TransposeConfig {
        &self.transpose
    }

    pub fn preview(&self) -> &PreviewConfig {
        &self.preview
    }
}

/// Styling for the SVG preview.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    padding: f32,
    fill_color: String,
    stroke_color: String,
    labels: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            padding: 20.0,
            fill_color: "#dbe9f6".to_string(),
            stroke_color: "#2f5d8a".to_string(),
            labels: true,
        }
    }
}

impl PreviewConfig {
    /// Margin around the scene, in document units
    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn fill_color(&self) -> &str {
        &self.fill_color
    }

    pub fn stroke_color(&self) -> &str {
        &self.stroke_color
    }

    /// Whether shape ids are drawn inside their rectangles
    pub fn labels(&self) -> bool {
        self.labels
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (regrid/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("regrid/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "regrid", "regrid") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use regrid::config::Anchor;

    use super::*;

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let result = load_config(Some("/definitely/not/here/config.toml"));
        assert!(matches!(result, Err(ConfigError::MissingFile(_))));
    }

    #[test]
    fn test_loads_sections_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [transpose]
            horizontalTolerance = 3.0
            anchor = "top-left"

            [preview]
            labels = false
            "#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.transpose().horizontal_tolerance(), 3.0);
        assert_eq!(config.transpose().vertical_tolerance(), 8.0);
        assert_eq!(config.transpose().anchor(), Anchor::TopLeft);
        assert!(!config.preview().labels());
        assert_eq!(config.preview().fill_color(), "#dbe9f6");
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[transpose\nhorizontal_tolerance = ").unwrap();

        let result = load_config(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
