//! Audio generation pipeline.
//!
//! Composes the speech synthesizer and the media processor: synthesize at a
//! content-driven speech rate, then optionally re-time the result to the
//! requested playback speed. The processor is a soft dependency; when it is
//! missing or fails mid-run the pipeline degrades to the unmodified
//! synthesis instead of failing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::Error;
use crate::media::{MediaProcessor, MediaStatus};
use crate::speech::{SpeechClient, SpeechRate};
use crate::text;
use crate::Result;

/// Playback speed applied when the caller does not choose one.
pub const DEFAULT_SPEED_FACTOR: f64 = 1.2;

/// Classification of the input, driving the synthesis speech rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Isolated vocabulary, spoken slowly for pronunciation clarity.
    Word,
    /// Everything else, spoken at the provider's normal rate.
    Sentence,
}

impl ContentType {
    /// Map a request argument to a content type. Only the exact string
    /// `word` selects slow speech; any other value means sentence.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "word" {
            Self::Word
        } else {
            Self::Sentence
        }
    }

    fn speech_rate(&self) -> SpeechRate {
        match self {
            Self::Word => SpeechRate::Slow,
            Self::Sentence => SpeechRate::Normal,
        }
    }
}

/// One audio generation request.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub text: String,
    pub output_path: PathBuf,
    pub content_type: ContentType,
    /// Playback speed multiplier, applied after synthesis. Independent of
    /// the speech rate chosen from `content_type`.
    pub speed_factor: f64,
}

impl GenerateRequest {
    pub fn new(
        text: impl Into<String>,
        output_path: impl Into<PathBuf>,
        content_type: ContentType,
    ) -> Self {
        Self {
            text: text.into(),
            output_path: output_path.into(),
            content_type,
            speed_factor: DEFAULT_SPEED_FACTOR,
        }
    }

    pub fn with_speed_factor(mut self, speed_factor: f64) -> Self {
        self.speed_factor = speed_factor;
        self
    }
}

/// Summary of a successful generation.
#[derive(Debug, Clone)]
pub struct AudioReport {
    pub path: PathBuf,
    pub bytes: u64,
    /// Whether the written audio went through the time-stretch stage.
    pub time_stretched: bool,
}

/// End-to-end generator: text in, verified audio file out.
pub struct AudioGenerator {
    speech: SpeechClient,
    media: MediaProcessor,
}

impl AudioGenerator {
    pub fn new(speech: SpeechClient, media: MediaProcessor) -> Self {
        Self { speech, media }
    }

    /// Run the full pipeline for one request.
    ///
    /// On success the file at `request.output_path` exists and is non-empty.
    /// On failure nothing useful is left behind: the intermediate file is
    /// removed and the output is absent or untrusted.
    pub fn generate(&self, request: &GenerateRequest) -> Result<AudioReport> {
        let text = text::normalize(&request.text);
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        ensure_parent_dir(&request.output_path)?;

        let rate = request.content_type.speech_rate();
        let status = self.media.detect();
        debug!(?status, "media processor probe");

        let mut time_stretched = false;
        match stretch_factor(request.speed_factor, status) {
            Some(factor) => {
                let temp = TempAudio::new();
                let audio = self.speech.synthesize(&text, rate)?;
                audio.save(temp.path())?;
                match self.media.time_stretch(temp.path(), &request.output_path, factor) {
                    Ok(()) => time_stretched = true,
                    Err(err) if err.is_post_process() => {
                        warn!(error = %err, "time-stretch failed, keeping unmodified audio");
                        fs::copy(temp.path(), &request.output_path)
                            .map_err(|e| Error::filesystem("copy", &request.output_path, e))?;
                    }
                    Err(err) => return Err(err),
                }
            }
            None => {
                let audio = self.speech.synthesize(&text, rate)?;
                audio.save(&request.output_path)?;
            }
        }

        let report = verify_output(&request.output_path, time_stretched)?;
        if report.time_stretched {
            info!(
                path = %report.path.display(),
                bytes = report.bytes,
                factor = request.speed_factor,
                "generated speech audio"
            );
        } else {
            info!(
                path = %report.path.display(),
                bytes = report.bytes,
                "generated speech audio"
            );
        }
        Ok(report)
    }
}

/// Decide whether to run the time-stretch stage, and at what factor.
///
/// Returns `None` for factors indistinguishable from 1.0, for invalid
/// factors and whenever the processor is not available; all of these mean
/// the synthesized audio is written as-is.
fn stretch_factor(speed_factor: f64, status: MediaStatus) -> Option<f64> {
    if !speed_factor.is_finite() || speed_factor <= 0.0 {
        warn!(factor = speed_factor, "ignoring invalid speed factor");
        return None;
    }
    if (speed_factor - 1.0).abs() < f64::EPSILON {
        return None;
    }
    if !status.is_available() {
        info!(
            factor = speed_factor,
            "media processor unavailable, writing unmodified audio"
        );
        return None;
    }
    Some(speed_factor)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::filesystem("create directory", parent, e))?;
        }
    }
    Ok(())
}

/// The sole success criterion: the artifact exists and is non-empty.
fn verify_output(path: &Path, time_stretched: bool) -> Result<AudioReport> {
    let metadata = fs::metadata(path).map_err(|_| Error::OutputVerification {
        path: path.to_path_buf(),
        reason: "file missing",
    })?;
    if metadata.len() == 0 {
        return Err(Error::OutputVerification {
            path: path.to_path_buf(),
            reason: "file is empty",
        });
    }
    Ok(AudioReport {
        path: path.to_path_buf(),
        bytes: metadata.len(),
        time_stretched,
    })
}

/// Intermediate synthesis artifact with a unique name under the system temp
/// directory. Removed on drop; removal failure is logged and swallowed.
struct TempAudio {
    path: PathBuf,
}

impl TempAudio {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("speechgen-{}.mp3", Uuid::new_v4()));
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempAudio {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                debug!(path = %self.path.display(), error = %e, "failed to remove temp audio");
            }
        }
    }
}
