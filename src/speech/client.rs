//! Speech synthesizer client.
//!
//! Talks to a Google-Translate-style TTS endpoint: one blocking GET per text
//! chunk, raw MP3 bytes back. Consecutive MP3 payloads concatenate into a
//! single playable stream, so multi-chunk synthesis needs no remuxing.

use tracing::debug;

use super::chunk::{split_text, MAX_CHUNK_CHARS};
use super::types::{SpeechAudio, SpeechRate};
use crate::error::Error;
use crate::Result;

const DEFAULT_BASE_URL: &str = "https://translate.google.com";
const ENDPOINT_PATH: &str = "/translate_tts";

/// Browser user agent; the public endpoint rejects obvious non-browser
/// clients.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Client for speech synthesis.
pub struct SpeechClient {
    http_client: reqwest::blocking::Client,
    base_url: String,
    language: String,
}

impl SpeechClient {
    pub fn builder() -> SpeechClientBuilder {
        SpeechClientBuilder::new()
    }

    /// Synthesize `text` at the requested rate.
    ///
    /// The text is split into provider-sized chunks, each requested exactly
    /// once and in order; the MP3 payloads are concatenated. Any transport
    /// failure or non-success status aborts the whole synthesis.
    pub fn synthesize(&self, text: &str, rate: SpeechRate) -> Result<SpeechAudio> {
        let chunks = split_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(Error::EmptyInput);
        }

        let endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), ENDPOINT_PATH);
        let total = chunks.len().to_string();
        let mut data = Vec::new();

        for (idx, chunk) in chunks.iter().enumerate() {
            let idx = idx.to_string();
            let textlen = chunk.chars().count().to_string();
            debug!(
                idx = %idx,
                total = %total,
                chars = %textlen,
                "requesting synthesis chunk"
            );
            let response = self
                .http_client
                .get(&endpoint)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", self.language.as_str()),
                    ("ttsspeed", rate.ttsspeed()),
                    ("total", total.as_str()),
                    ("idx", idx.as_str()),
                    ("textlen", textlen.as_str()),
                    ("q", chunk.as_str()),
                ])
                .send()
                .map_err(|e| Error::synthesis(format!("request failed: {}", e)))?;

            let status = response.status();
            let bytes = response
                .bytes()
                .map_err(|e| Error::synthesis(format!("failed to read response: {}", e)))?;
            if !status.is_success() {
                let body_str = String::from_utf8_lossy(&bytes);
                return Err(Error::synthesis(format!(
                    "provider returned {}: {}",
                    status, body_str
                )));
            }
            data.extend_from_slice(&bytes);
        }

        Ok(SpeechAudio { data })
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

pub struct SpeechClientBuilder {
    base_url: Option<String>,
    language: Option<String>,
    tld: Option<String>,
    timeout: Option<std::time::Duration>,
}

impl SpeechClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            language: None,
            tld: None,
            timeout: None,
        }
    }

    /// Full endpoint base, e.g. `https://translate.google.com`. Overrides
    /// any configured TLD.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Synthesis language code (default `en`).
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Accent-selecting top-level domain, e.g. `co.uk` for a British voice.
    pub fn tld(mut self, tld: impl Into<String>) -> Self {
        self.tld = Some(tld.into());
        self
    }

    /// Per-request timeout. Without one, a request blocks until the
    /// connection dies.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<SpeechClient> {
        let base_url = self.base_url.unwrap_or_else(|| match self.tld {
            Some(ref tld) => format!("https://translate.google.{}", tld),
            None => DEFAULT_BASE_URL.to_string(),
        });
        let language = self.language.unwrap_or_else(|| "en".to_string());
        let http_client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::synthesis(format!("failed to create HTTP client: {}", e)))?;
        Ok(SpeechClient {
            http_client,
            base_url,
            language,
        })
    }
}

impl Default for SpeechClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = SpeechClient::builder().build().unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.language(), "en");
    }

    #[test]
    fn test_builder_tld_selects_accent_host() {
        let client = SpeechClient::builder().tld("co.uk").build().unwrap();
        assert_eq!(client.base_url, "https://translate.google.co.uk");
    }

    #[test]
    fn test_builder_base_url_overrides_tld() {
        let client = SpeechClient::builder()
            .tld("co.uk")
            .base_url("http://127.0.0.1:9999")
            .language("fr")
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:9999");
        assert_eq!(client.language(), "fr");
    }
}
