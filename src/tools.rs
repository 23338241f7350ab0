//! Analyzer binary resolution
//!
//! The Rhubarb Lip Sync distribution ships per-OS under the tools directory;
//! each supported OS maps to a fixed relative path. Unsupported platforms
//! get a distinct error instead of silently borrowing another OS's binary.

use crate::error::{PipelineError, Result};
use std::path::{Path, PathBuf};

/// Relative path of the analyzer binary under the tools directory for the
/// host OS.
pub fn analyzer_relative_path() -> Result<PathBuf> {
    if cfg!(target_os = "windows") {
        Ok(["Rhubarb-Lip-Sync-1.14.0-Windows", "rhubarb.exe"]
            .iter()
            .collect())
    } else if cfg!(target_os = "linux") {
        Ok(["rhubarb-Lip-Sync-1.13.0-Linux", "rhubarb"].iter().collect())
    } else {
        Err(PipelineError::UnsupportedPlatform(std::env::consts::OS))
    }
}

/// Resolve the analyzer binary under `tools_dir`, verifying it exists.
///
/// Fails with [`PipelineError::AnalyzerNotFound`] when the mapped binary is
/// absent, so a missing installation surfaces before any process is spawned.
pub fn analyzer_binary(tools_dir: &Path) -> Result<PathBuf> {
    let path = tools_dir.join(analyzer_relative_path()?);
    if !path.is_file() {
        return Err(PipelineError::AnalyzerNotFound(path));
    }
    Ok(path)
}
