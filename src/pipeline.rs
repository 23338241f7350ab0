//! Audio-to-viseme pipeline
//!
//! Drives two external tools in sequence over temp files: the transcoder
//! normalizes arbitrary input audio to the WAV encoding the analyzer
//! requires (16-bit PCM, 44.1 kHz, stereo), then the analyzer emits viseme
//! timing JSON. The JSON text is returned verbatim; this component never
//! parses or reshapes it.
//!
//! Both tools are invoked with argument arrays, never through a shell, so
//! paths with spaces or metacharacters need no quoting.

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::scratch::ScratchFiles;
use crate::tools;
use std::time::Instant;
use tokio::process::Command;
use tracing::{debug, info};

/// Lip-sync analysis pipeline
///
/// One instance may serve any number of concurrent [`process`] calls; each
/// call owns its own uniquely named scratch files and child processes.
///
/// [`process`]: LipSyncPipeline::process
pub struct LipSyncPipeline {
    config: PipelineConfig,
}

impl LipSyncPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Convert an audio buffer into viseme timing JSON.
    ///
    /// The buffer may be in any encoding the transcoder accepts; malformed
    /// input surfaces as the transcoder's non-zero exit, not as validation
    /// here.
    ///
    /// # Errors
    /// - [`PipelineError::Spawn`] if a tool could not be started
    /// - [`PipelineError::AnalyzerNotFound`] / [`PipelineError::UnsupportedPlatform`]
    ///   if the analyzer binary cannot be resolved for this host
    /// - [`PipelineError::ToolFailed`] if a tool exited non-zero (carries
    ///   exit code and stderr)
    /// - [`PipelineError::ResultRead`] if the result file is unreadable
    ///   after the analyzer reported success
    ///
    /// Every temp file created during the call is removed before it
    /// returns, on success and on every failure path.
    pub async fn process(&self, audio: &[u8]) -> Result<String> {
        let started = Instant::now();

        // Dropped on every exit path below; removes whatever was created
        let scratch = ScratchFiles::allocate(&self.config.temp_dir);

        debug!(
            input = %scratch.input.display(),
            bytes = audio.len(),
            "Starting lip-sync pipeline"
        );

        // Input must be fully on disk before the transcoder is spawned
        tokio::fs::write(&scratch.input, audio).await?;

        let analyzer = tools::analyzer_binary(&self.config.tools_dir)?;

        let mut transcode = Command::new(&self.config.transcoder);
        transcode
            .arg("-y")
            .arg("-i")
            .arg(&scratch.input)
            .args(["-acodec", "pcm_s16le", "-ar", "44100", "-ac", "2"])
            .arg(&scratch.transcoded);
        run_tool("transcoder", transcode).await?;

        let mut analyze = Command::new(&analyzer);
        analyze
            .args(["-r", "phonetic", "-f", "json"])
            .arg(&scratch.transcoded)
            .arg("-o")
            .arg(&scratch.result);
        run_tool("analyzer", analyze).await?;

        let json = tokio::fs::read_to_string(&scratch.result)
            .await
            .map_err(|source| PipelineError::ResultRead {
                path: scratch.result.clone(),
                source,
            })?;

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            result_bytes = json.len(),
            "Lip-sync pipeline complete"
        );

        Ok(json)
    }
}

/// Run one external tool to completion, capturing stdout/stderr.
///
/// Spawn failures carry the rendered command line; non-zero exits carry the
/// exit code and captured stderr.
async fn run_tool(tool: &'static str, mut command: Command) -> Result<()> {
    let rendered = format!("{:?}", command.as_std());

    debug!(tool, command = %rendered, "Invoking external tool");

    let output = command
        .output()
        .await
        .map_err(|source| PipelineError::Spawn {
            command: rendered,
            source,
        })?;

    if !output.status.success() {
        return Err(PipelineError::ToolFailed {
            tool,
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    debug!(tool, "External tool completed");
    Ok(())
}
