//! Temporary interchange files with guaranteed cleanup
//!
//! Each pipeline run owns one [`ScratchFiles`] set: three uniquely named
//! paths under the configured temp directory. Dropping the set removes
//! whichever files were actually created, so cleanup runs on every exit
//! path, including early error returns. Removal failures are logged per
//! file and never surface to the caller.

use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// The three temp paths used by one pipeline invocation
#[derive(Debug)]
pub struct ScratchFiles {
    /// On-disk copy of the caller's audio buffer
    pub input: PathBuf,
    /// Transcoder output (normalized WAV)
    pub transcoded: PathBuf,
    /// Analyzer output (viseme timing JSON)
    pub result: PathBuf,
}

impl ScratchFiles {
    /// Allocate unique paths under `temp_dir`.
    ///
    /// Uniqueness holds across concurrent invocations in the same process:
    /// each set gets its own v4 UUID token.
    pub fn allocate(temp_dir: &Path) -> Self {
        let token = Uuid::new_v4();
        Self {
            input: temp_dir.join(format!("input_{token}.wav")),
            transcoded: temp_dir.join(format!("processed_{token}.wav")),
            result: temp_dir.join(format!("output_{token}.json")),
        }
    }
}

impl Drop for ScratchFiles {
    fn drop(&mut self) {
        for path in [&self.input, &self.transcoded, &self.result] {
            // Files from failed early steps may not exist
            if !path.exists() {
                continue;
            }
            if let Err(e) = std::fs::remove_file(path) {
                warn!(path = %path.display(), error = %e, "Failed to remove temp file");
            }
        }
    }
}
