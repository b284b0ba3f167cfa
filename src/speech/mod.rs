//! Speech synthesis module: turns text into MP3 audio through a
//! Google-Translate-style TTS endpoint.

mod chunk;
mod client;
mod types;

pub use client::{SpeechClient, SpeechClientBuilder};
pub use types::{SpeechAudio, SpeechRate};
