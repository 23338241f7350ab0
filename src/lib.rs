//! mouthsync - audio-to-viseme timing pipeline
//!
//! Converts an in-memory audio buffer into mouth-shape ("viseme") timing
//! JSON by driving two external command-line tools in sequence: an audio
//! transcoder (ffmpeg) and a lip-sync analyzer (Rhubarb Lip Sync), with
//! uniquely named temp files as the interchange format and guaranteed
//! cleanup on every exit path.
//!
//! ```rust,ignore
//! use mouthsync::{LipSyncPipeline, PipelineConfig};
//!
//! let pipeline = LipSyncPipeline::new(PipelineConfig::new(".tools"));
//! let json = pipeline.process(&audio_bytes).await?;
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod scratch;
pub mod tools;

pub use crate::config::PipelineConfig;
pub use crate::error::{PipelineError, Result};
pub use crate::pipeline::LipSyncPipeline;
