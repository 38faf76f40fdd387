//! Configuration management for the pre-surgery analyzer

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub models: ModelsConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the form is served on
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8501".to_string(),
        }
    }
}

/// ML models configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    /// Directory containing the ONNX model files
    pub models_dir: String,
    /// File names of the four artifacts, relative to `models_dir`
    pub files: ModelFiles,
    /// Number of threads for ONNX inference per model (default: 1)
    pub onnx_threads: usize,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            models_dir: ".".to_string(),
            files: ModelFiles::default(),
            onnx_threads: 1,
        }
    }
}

impl ModelsConfig {
    /// Resolve the artifact paths in registry order: suitability, mortality, recovery, stay.
    pub fn artifact_paths(&self) -> [(&'static str, PathBuf); 4] {
        let dir = Path::new(&self.models_dir);
        [
            ("suitability", dir.join(&self.files.suitability)),
            ("mortality", dir.join(&self.files.mortality)),
            ("recovery", dir.join(&self.files.recovery)),
            ("stay", dir.join(&self.files.stay)),
        ]
    }
}

/// Artifact file names
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelFiles {
    pub suitability: String,
    pub mortality: String,
    pub recovery: String,
    pub stay: String,
}

impl Default for ModelFiles {
    fn default() -> Self {
        Self {
            suitability: "model_suitability.onnx".to_string(),
            mortality: "model_mortality.onnx".to_string(),
            recovery: "model_recovery.onnx".to_string(),
            stay: "model_stay.onnx".to_string(),
        }
    }
}

/// Presentation options for the rendered page
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Page title
    pub title: String,
    /// Prefix result labels with emoji
    pub emoji: bool,
    /// Render the survival likelihood progress bar
    pub show_survival_likelihood: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Pre-Surgery Analyzer".to_string(),
            emoji: true,
            show_survival_likelihood: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/config.toml")
    }

    /// Load configuration from a specific path.
    ///
    /// A missing file yields the built-in defaults; a malformed one is an error.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
