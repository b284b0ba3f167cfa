//! Media processor integration.
//!
//! Wraps a local `ffmpeg` executable behind two capabilities: a version
//! probe for soft-dependency detection and a pitch-preserving time-stretch
//! built on the `atempo` audio filter. The processor is optional at runtime;
//! callers decide per run whether to post-process based on the probe.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::Error;
use crate::Result;

/// Environment override for the ffmpeg executable path.
const FFMPEG_BIN_ENV: &str = "FFMPEG_BIN";

/// Valid range of a single `atempo` filter instance. Factors outside are
/// decomposed into a chain of instances.
const ATEMPO_MIN: f64 = 0.5;
const ATEMPO_MAX: f64 = 2.0;

/// Outcome of probing for the media processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaStatus {
    /// The executable ran and reported a version.
    Available,
    /// The executable is missing or its version query failed.
    Unavailable,
    /// The probe itself failed for another reason (e.g. permissions).
    /// Treated like `Unavailable` when deciding whether to post-process.
    Unknown,
}

impl MediaStatus {
    /// Whether time-stretching may be attempted.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Handle on the external audio processor.
pub struct MediaProcessor {
    bin: PathBuf,
}

impl MediaProcessor {
    /// Use `bin` as the ffmpeg executable.
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }

    /// Resolve the executable from `FFMPEG_BIN`, falling back to `ffmpeg`
    /// on the search path.
    pub fn from_env() -> Self {
        let bin = std::env::var(FFMPEG_BIN_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("ffmpeg"));
        Self::new(bin)
    }

    /// Probe the executable with its version query. Only the exit status
    /// matters; all output is discarded.
    pub fn detect(&self) -> MediaStatus {
        let result = Command::new(&self.bin)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match result {
            Ok(status) if status.success() => MediaStatus::Available,
            Ok(status) => {
                debug!(bin = ?self.bin, code = ?status.code(), "media processor probe failed");
                MediaStatus::Unavailable
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(bin = ?self.bin, "media processor not found");
                MediaStatus::Unavailable
            }
            Err(e) => {
                debug!(bin = ?self.bin, error = %e, "media processor probe inconclusive");
                MediaStatus::Unknown
            }
        }
    }

    /// Rewrite `input` so it plays `factor` times as fast, writing the
    /// result to `output`. Pitch is preserved.
    ///
    /// A factor of exactly 1.0 degenerates to a byte-identical copy; the
    /// filter is never invoked for it.
    pub fn time_stretch(&self, input: &Path, output: &Path, factor: f64) -> Result<()> {
        if (factor - 1.0).abs() < f64::EPSILON {
            fs::copy(input, output).map_err(|e| Error::filesystem("copy", output, e))?;
            return Ok(());
        }

        let filter = atempo_chain(factor);
        let mut cmd = Command::new(&self.bin);
        cmd.arg("-hide_banner")
            .arg("-loglevel")
            .arg("error")
            .arg("-y")
            .arg("-i")
            .arg(input)
            .arg("-filter:a")
            .arg(&filter)
            .arg(output);

        debug!(command = ?cmd, "running media processor");
        let output_result = cmd
            .output()
            .map_err(|e| Error::post_process(format!("failed to run {}: {}", self.bin.display(), e)))?;
        if !output_result.status.success() {
            return Err(Error::post_process(format!(
                "{} exited with {}: {}",
                self.bin.display(),
                output_result.status,
                String::from_utf8_lossy(&output_result.stderr).trim()
            )));
        }
        Ok(())
    }
}

impl Default for MediaProcessor {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Decompose `factor` into a comma-joined `atempo` chain whose stages all
/// sit inside the filter's valid range and multiply back to `factor`.
fn atempo_chain(factor: f64) -> String {
    let mut stages = Vec::new();
    let mut rest = factor;
    while rest > ATEMPO_MAX {
        stages.push(ATEMPO_MAX);
        rest /= ATEMPO_MAX;
    }
    while rest < ATEMPO_MIN {
        stages.push(ATEMPO_MIN);
        rest /= ATEMPO_MIN;
    }
    stages.push(rest);
    stages
        .iter()
        .map(|stage| format!("atempo={}", stage))
        .collect::<Vec<_>>()
        .join(",")
}
