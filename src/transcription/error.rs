//! Error types for transcription attempts and their caller-facing outcome.
//!
//! `AttemptError` carries the full detail of one failed POST and only ever reaches
//! the logs. `TranscriptionError` is what callers see after the retry policy has
//! run: an opaque kind with a generic message, so neither the endpoint nor the
//! credential can leak into user-facing text.

use thiserror::Error;

/// Failure of a single transport attempt.
#[derive(Debug, Error)]
pub enum AttemptError {
    /// The connection to the endpoint could not be established
    #[error("failed to connect to transcription endpoint")]
    Connect(#[source] reqwest::Error),

    /// The request did not complete within the overall timeout
    #[error("transcription request timed out")]
    Timeout(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("transcription endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Any other failure while sending the request or reading the body
    #[error("transport error")]
    Transport(#[source] reqwest::Error),

    /// The HTTP client or the multipart form could not be built
    #[error("failed to build transcription request")]
    Build(#[source] reqwest::Error),

    /// The body parsed but did not have the expected shape
    #[error("unexpected response from transcription endpoint: {0}")]
    UnexpectedResponse(String),

    #[error("failed to parse JSON response")]
    Json(#[from] serde_json::Error),

    #[error("response body is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The blocking worker panicked or the pool was shut down
    #[error("worker failure: {0}")]
    Worker(String),
}

impl AttemptError {
    /// Classifies a reqwest error into the matching attempt error.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_builder() {
            AttemptError::Build(err)
        } else if err.is_timeout() {
            AttemptError::Timeout(err)
        } else if err.is_connect() {
            AttemptError::Connect(err)
        } else {
            AttemptError::Transport(err)
        }
    }

    /// Returns true for failures of the network layer: connection errors, timeouts,
    /// transport errors and non-2xx statuses.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            AttemptError::Connect(_)
                | AttemptError::Timeout(_)
                | AttemptError::Status { .. }
                | AttemptError::Transport(_)
        )
    }
}

/// Outcome kinds surfaced to callers once retries are exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TranscriptionError {
    #[error("Network error occurred while processing audio")]
    Network,

    #[error("An unknown error occurred while processing audio")]
    Unknown,

    /// The caller cancelled the request. Never retried.
    #[error("Transcription cancelled")]
    Cancelled,
}

impl TranscriptionError {
    /// Collapses the last attempt failure into its caller-facing kind.
    pub fn from_attempt(err: &AttemptError) -> Self {
        if err.is_network() {
            TranscriptionError::Network
        } else {
            TranscriptionError::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_network() {
        let err = AttemptError::Status {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert!(err.is_network());
        assert_eq!(TranscriptionError::from_attempt(&err), TranscriptionError::Network);
    }

    #[test]
    fn test_decode_failures_are_unknown() {
        let err = AttemptError::UnexpectedResponse("no text".to_string());
        assert!(!err.is_network());
        assert_eq!(TranscriptionError::from_attempt(&err), TranscriptionError::Unknown);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AttemptError::from(json_err);
        assert_eq!(TranscriptionError::from_attempt(&err), TranscriptionError::Unknown);

        let err = AttemptError::Worker("panicked".to_string());
        assert!(!err.is_network());
    }

    #[test]
    fn test_caller_messages_are_generic() {
        assert_eq!(
            TranscriptionError::Network.to_string(),
            "Network error occurred while processing audio"
        );
        assert_eq!(
            TranscriptionError::Unknown.to_string(),
            "An unknown error occurred while processing audio"
        );
    }
}
