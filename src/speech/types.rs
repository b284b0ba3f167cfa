//! Speech synthesis types.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::Result;

/// Delivery rate requested from the provider at synthesis time.
///
/// This changes how the speech is spoken at the source. It is independent of
/// any time-stretching applied to the audio afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechRate {
    Normal,
    Slow,
}

impl SpeechRate {
    /// Value of the provider's `ttsspeed` query parameter.
    pub(crate) fn ttsspeed(&self) -> &'static str {
        match self {
            Self::Normal => "1",
            Self::Slow => "0.24",
        }
    }
}

/// Synthesized MP3 audio assembled from one or more provider responses.
#[derive(Debug, Clone)]
pub struct SpeechAudio {
    pub data: Vec<u8>,
}

impl SpeechAudio {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write the audio to `path`, returning the number of bytes written.
    pub fn save(&self, path: &Path) -> Result<u64> {
        fs::write(path, &self.data).map_err(|e| Error::filesystem("write", path, e))?;
        Ok(self.data.len() as u64)
    }
}
