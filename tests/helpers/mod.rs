//! Test helper utilities
//!
//! Stub tool scripts stand in for ffmpeg and Rhubarb so pipeline behavior
//! can be tested without the real binaries installed.

#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Generate an in-memory silent WAV (16-bit PCM, 44.1 kHz, stereo)
pub fn silent_wav_bytes(duration_seconds: f64) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).expect("create WAV writer");
        let total_samples = (duration_seconds * spec.sample_rate as f64) as usize;
        for _ in 0..total_samples * spec.channels as usize {
            writer.write_sample(0i16).expect("write sample");
        }
        writer.finalize().expect("finalize WAV");
    }
    cursor.into_inner()
}

/// Write an executable `/bin/sh` script
#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let script = format!("#!/bin/sh\n{body}");
    std::fs::write(path, script).expect("write script");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("chmod script");
}

/// Install a stub transcoder script in `dir` and return its path.
///
/// Receives the pipeline's ffmpeg argument list
/// (`-y -i IN -acodec pcm_s16le -ar 44100 -ac 2 OUT`), so `$3` is the input
/// path and `${10}` the output path.
#[cfg(unix)]
pub fn install_stub_transcoder(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("stub-transcoder");
    write_script(&path, body);
    path
}

/// Stub transcoder body that copies input to output
#[cfg(unix)]
pub const TRANSCODER_COPY: &str = "cp \"$3\" \"${10}\"\n";

/// Install a stub analyzer under `tools_dir` at the Linux distribution path
/// the resolver expects.
///
/// Receives the pipeline's Rhubarb argument list
/// (`-r phonetic -f json IN -o OUT`), so `$5` is the input path and `$7`
/// the output path.
#[cfg(target_os = "linux")]
pub fn install_stub_analyzer(tools_dir: &Path, body: &str) -> PathBuf {
    let bin_dir = tools_dir.join("rhubarb-Lip-Sync-1.13.0-Linux");
    std::fs::create_dir_all(&bin_dir).expect("create analyzer dir");
    let path = bin_dir.join("rhubarb");
    write_script(&path, body);
    path
}

/// Assert a directory holds no entries (no leaked temp files)
pub fn assert_dir_empty(dir: &Path) {
    let leftover: Vec<_> = std::fs::read_dir(dir)
        .expect("read temp dir")
        .map(|e| e.expect("dir entry").file_name())
        .collect();
    assert!(
        leftover.is_empty(),
        "temp files leaked: {:?}",
        leftover
    );
}
