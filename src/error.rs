//! Error types for the mouthsync pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Pipeline errors
///
/// Every failure the pipeline can surface is a distinct variant so callers
/// can tell which stage failed. Cleanup failures are deliberately absent:
/// they are logged per file and never replace the primary error.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// External process could not be started (missing binary, permission)
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        /// The command line that was attempted
        command: String,
        source: std::io::Error,
    },

    /// Analyzer binary is not present at its mapped location
    #[error("lip-sync analyzer not found at {0} (is the Rhubarb distribution installed under the tools directory?)")]
    AnalyzerNotFound(PathBuf),

    /// No analyzer distribution is shipped for the host OS
    #[error("no lip-sync analyzer available for this platform: {0}")]
    UnsupportedPlatform(&'static str),

    /// Process started but exited non-zero; carries exit code and stderr
    #[error("{tool} failed with exit code {code:?}: {stderr}")]
    ToolFailed {
        /// Tool name ("transcoder" or "analyzer")
        tool: &'static str,
        /// Exit code, None if terminated by signal
        code: Option<i32>,
        /// Captured standard-error text
        stderr: String,
    },

    /// Result file missing or unreadable after the analyzer reported success
    #[error("failed to read analyzer result {path}: {source}")]
    ResultRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// I/O error writing the input buffer to disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
