//! Pipeline configuration
//!
//! Resolution follows a fixed priority order:
//! 1. Explicit value (constructor / CLI argument)
//! 2. Environment variable (`MOUTHSYNC_TOOLS_DIR`, `MOUTHSYNC_TRANSCODER`,
//!    `MOUTHSYNC_TEMP_DIR`)
//! 3. TOML config file
//! 4. Compiled default
//!
//! A missing or unreadable TOML file degrades to defaults with a warning;
//! it never prevents construction.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable naming the analyzer tools directory
pub const ENV_TOOLS_DIR: &str = "MOUTHSYNC_TOOLS_DIR";
/// Environment variable naming the transcoder executable
pub const ENV_TRANSCODER: &str = "MOUTHSYNC_TRANSCODER";
/// Environment variable naming the temp file directory
pub const ENV_TEMP_DIR: &str = "MOUTHSYNC_TEMP_DIR";

/// Default transcoder command, resolved through PATH by the OS
pub const DEFAULT_TRANSCODER: &str = "ffmpeg";

/// TOML file schema (all keys optional)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Directory holding the Rhubarb Lip Sync distribution
    pub tools_dir: Option<PathBuf>,
    /// Transcoder executable name or path
    pub transcoder: Option<String>,
    /// Directory for temporary interchange files
    pub temp_dir: Option<PathBuf>,
}

impl TomlConfig {
    /// Parse a TOML config file; missing or malformed files yield defaults
    /// with a warning rather than an error.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Config file not readable, using defaults");
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Config file not valid TOML, using defaults");
                Self::default()
            }
        }
    }
}

/// Resolved pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Installation root holding the per-OS Rhubarb distribution
    pub tools_dir: PathBuf,
    /// Transcoder executable (name looked up on PATH, or absolute path)
    pub transcoder: String,
    /// Directory where temp interchange files are created
    pub temp_dir: PathBuf,
}

impl PipelineConfig {
    /// Configuration rooted at an explicit tools directory, everything else
    /// defaulted.
    pub fn new(tools_dir: impl Into<PathBuf>) -> Self {
        Self {
            tools_dir: tools_dir.into(),
            transcoder: DEFAULT_TRANSCODER.to_string(),
            temp_dir: std::env::temp_dir(),
        }
    }

    /// Resolve configuration from the tiered sources.
    ///
    /// `tools_dir_override` is the explicit (CLI) value and wins outright;
    /// `config_file`, when given, supplies the TOML tier.
    pub fn resolve(tools_dir_override: Option<&Path>, config_file: Option<&Path>) -> Self {
        let toml = config_file.map(TomlConfig::load).unwrap_or_default();

        let tools_dir = tools_dir_override
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(ENV_TOOLS_DIR).map(PathBuf::from))
            .or(toml.tools_dir)
            .unwrap_or_else(|| PathBuf::from(".tools"));

        let transcoder = std::env::var(ENV_TRANSCODER)
            .ok()
            .or(toml.transcoder)
            .unwrap_or_else(|| DEFAULT_TRANSCODER.to_string());

        let temp_dir = std::env::var_os(ENV_TEMP_DIR)
            .map(PathBuf::from)
            .or(toml.temp_dir)
            .unwrap_or_else(std::env::temp_dir);

        Self {
            tools_dir,
            transcoder,
            temp_dir,
        }
    }

    /// Override the temp directory (used when callers manage their own
    /// scratch space)
    pub fn with_temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = temp_dir.into();
        self
    }

    /// Override the transcoder executable
    pub fn with_transcoder(mut self, transcoder: impl Into<String>) -> Self {
        self.transcoder = transcoder.into();
        self
    }
}
