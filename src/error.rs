use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the speech generation pipeline.
///
/// Every stage reports failure through one of these categories instead of
/// collapsing into a boolean; the CLI maps any of them to a non-zero exit.
#[derive(Debug, Error)]
pub enum Error {
    /// The input text was empty once trimmed and normalized.
    #[error("Empty input: nothing to synthesize after trimming")]
    EmptyInput,

    /// The speech provider could not be reached or answered with an error.
    #[error("Synthesis error: {message}")]
    Synthesis { message: String },

    /// A local filesystem operation failed.
    #[error("Filesystem error: {operation} {}: {source}", .path.display())]
    Filesystem {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The media processor could not be spawned or exited unsuccessfully.
    #[error("Post-processing error: {message}")]
    PostProcess { message: String },

    /// The final artifact is missing or has zero length.
    #[error("Output verification failed for {}: {reason}", .path.display())]
    OutputVerification { path: PathBuf, reason: &'static str },
}

impl Error {
    /// Create a synthesis error from any displayable cause.
    pub fn synthesis(message: impl Into<String>) -> Self {
        Error::Synthesis {
            message: message.into(),
        }
    }

    /// Create a post-processing error from any displayable cause.
    pub fn post_process(message: impl Into<String>) -> Self {
        Error::PostProcess {
            message: message.into(),
        }
    }

    /// Create a filesystem error tagged with the operation that failed.
    pub fn filesystem(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Filesystem {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Whether the failure happened after synthesis, in the optional
    /// post-processing stage. Callers with the raw audio in hand can
    /// recover from these by keeping the unmodified result.
    pub fn is_post_process(&self) -> bool {
        matches!(self, Error::PostProcess { .. })
    }
}
