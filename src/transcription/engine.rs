//! Speech-to-text engine: bounded retry and cancellation around the blocking client.
//!
//! Every attempt is a blocking POST dispatched to the [`WorkerPool`]. Failed
//! attempts are logged with full detail and retried after a fixed delay; once the
//! retry budget is spent the last failure collapses into an opaque
//! [`TranscriptionError`]. Cancellation wins over everything and is never retried.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::client::{ClientSettings, TranscriptionClient};
use super::error::TranscriptionError;
use super::worker::WorkerPool;

/// How often and how far apart failed attempts are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SttEngine {
    client: TranscriptionClient,
    pool: WorkerPool,
    retry: RetryPolicy,
}

impl SttEngine {
    pub fn new(settings: ClientSettings, pool: WorkerPool) -> Self {
        Self {
            client: TranscriptionClient::new(settings),
            pool,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn settings(&self) -> &ClientSettings {
        self.client.settings()
    }

    /// Transcribes one clip.
    ///
    /// `language_override`, when non-empty, replaces the configured default language
    /// for this call only.
    ///
    /// # Errors
    /// - `Cancelled` as soon as `cancel` fires, without further attempts
    /// - `Network` if the last attempt failed at the network layer
    /// - `Unknown` if the last attempt failed for any other reason
    pub async fn transcribe(
        &self,
        audio: Vec<u8>,
        language_override: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<String, TranscriptionError> {
        let request = Arc::new(self.client.request(audio, language_override));

        tracing::info!(
            "Transcribing {} bytes with model {} (language: {})",
            request.audio.len(),
            request.model,
            request.language.as_deref().unwrap_or("auto")
        );

        let mut attempt: u32 = 1;
        loop {
            let client = self.client.clone();
            let job_request = Arc::clone(&request);

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::warn!("STT request cancelled during attempt {attempt}");
                    return Err(TranscriptionError::Cancelled);
                }
                outcome = self.pool.run(move || client.send(&job_request)) => outcome,
            };

            let err = match outcome {
                Ok(text) => {
                    tracing::info!("Transcription succeeded on attempt {attempt}");
                    return Ok(text);
                }
                Err(err) => err,
            };

            if err.is_network() {
                tracing::error!(error = ?err, "Network error in transcription on attempt {attempt}: {err}");
            } else {
                tracing::error!(error = ?err, "Unknown error in transcription on attempt {attempt}: {err}");
            }

            if attempt > self.retry.max_retries {
                return Err(TranscriptionError::from_attempt(&err));
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::warn!("STT request cancelled before retry");
                    return Err(TranscriptionError::Cancelled);
                }
                _ = tokio::time::sleep(self.retry.delay) => {}
            }

            attempt += 1;
            tracing::debug!("Retrying HTTP call (attempt {attempt})");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_retries_once_after_one_second() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 1);
        assert_eq!(policy.delay, Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_cancelled_before_start_makes_no_attempt() {
        let settings = ClientSettings::new(
            "http://127.0.0.1:9/v1/audio/transcriptions",
            None,
            "whisper-1",
            None,
            Default::default(),
        );
        let engine = SttEngine::new(settings, WorkerPool::new(1));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = engine.transcribe(vec![1, 2, 3], None, &cancel).await;
        assert_eq!(result, Err(TranscriptionError::Cancelled));
    }
}
