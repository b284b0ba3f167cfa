//! # speechgen
//!
//! Turns a text string into a speech audio file, optionally re-timed to a
//! target playback speed.
//!
//! ## Overview
//!
//! The crate implements no synthesis or signal processing of its own. It
//! orchestrates two external collaborators:
//!
//! - a network text-to-speech provider (a Google-Translate-style endpoint)
//!   reached over blocking HTTP, and
//! - a local `ffmpeg` executable whose `atempo` filter re-times the audio
//!   without changing pitch. ffmpeg is a soft dependency, probed per run;
//!   when it is missing the unmodified synthesis is written instead.
//!
//! Each run is a single synchronous request: synthesize at a content-driven
//! speech rate (slow for isolated words, normal otherwise), optionally
//! time-stretch by a playback factor, then verify the artifact on disk.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use speechgen::generator::{AudioGenerator, ContentType, GenerateRequest};
//! use speechgen::media::MediaProcessor;
//! use speechgen::speech::SpeechClient;
//!
//! fn main() -> speechgen::Result<()> {
//!     let speech = SpeechClient::builder().build()?;
//!     let generator = AudioGenerator::new(speech, MediaProcessor::from_env());
//!
//!     let request = GenerateRequest::new("hello", "/tmp/audio/hello.mp3", ContentType::Word);
//!     let report = generator.generate(&request)?;
//!     println!("wrote {} bytes to {}", report.bytes, report.path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`generator`] | End-to-end pipeline: synthesize, re-time, verify |
//! | [`speech`] | Synthesizer client (chunked requests, MP3 assembly) |
//! | [`media`] | ffmpeg probe and time-stretch wrapper |
//! | [`text`] | Input normalization before synthesis |
//! | [`error`] | Failure taxonomy for every pipeline stage |

pub mod generator;
pub mod media;
pub mod speech;
pub mod text;

// Re-export main types for convenience
pub use generator::{AudioGenerator, AudioReport, ContentType, GenerateRequest, DEFAULT_SPEED_FACTOR};
pub use media::{MediaProcessor, MediaStatus};
pub use speech::{SpeechAudio, SpeechClient, SpeechClientBuilder, SpeechRate};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
