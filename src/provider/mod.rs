//! Speech-to-text provider surface exposed to the host.
//!
//! The host hands a provider a stream of audio chunks plus per-request metadata and
//! gets back a [`SpeechResult`]. Two adapters implement [`SpeechToTextProvider`]:
//! [`EntryProvider`] for config entries and [`PlatformProvider`] for the legacy
//! static configuration. Both share the recognition path defined on the trait.

pub mod entry;
pub mod platform;

pub use entry::EntryProvider;
pub use platform::PlatformProvider;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::transcription::capabilities::{
    self, AudioBitRate, AudioChannel, AudioCodec, AudioFormat, AudioSampleRate,
};
use crate::transcription::{SttEngine, TranscriptionError};

/// Per-request metadata supplied by the host alongside the audio stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeechMetadata {
    /// Language requested for this recognition; empty or absent uses the default
    pub language: Option<String>,
    pub format: AudioFormat,
    pub codec: AudioCodec,
    pub bit_rate: AudioBitRate,
    pub sample_rate: AudioSampleRate,
    pub channel: AudioChannel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechResultState {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechResult {
    pub text: String,
    pub state: SpeechResultState,
}

impl SpeechResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: SpeechResultState::Success,
        }
    }

    pub fn error() -> Self {
        Self {
            text: String::new(),
            state: SpeechResultState::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.state == SpeechResultState::Success
    }
}

/// The host cancelled the recognition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("speech recognition cancelled")]
pub struct Cancelled;

#[async_trait::async_trait]
pub trait SpeechToTextProvider: Send + Sync {
    fn name(&self) -> &str;

    fn unique_id(&self) -> &str;

    fn default_language(&self) -> &str;

    fn engine(&self) -> &SttEngine;

    fn supported_languages(&self) -> &'static [&'static str] {
        capabilities::SUPPORTED_LANGUAGES
    }

    fn supported_formats(&self) -> &'static [AudioFormat] {
        capabilities::SUPPORTED_FORMATS
    }

    fn supported_codecs(&self) -> &'static [AudioCodec] {
        capabilities::SUPPORTED_CODECS
    }

    fn supported_bit_rates(&self) -> &'static [AudioBitRate] {
        capabilities::SUPPORTED_BIT_RATES
    }

    fn supported_sample_rates(&self) -> &'static [AudioSampleRate] {
        capabilities::SUPPORTED_SAMPLE_RATES
    }

    fn supported_channels(&self) -> &'static [AudioChannel] {
        capabilities::SUPPORTED_CHANNELS
    }

    /// Collects the audio stream and transcribes it.
    ///
    /// Empty text and every transcription failure map to an error result without
    /// detail. Only cancellation is returned as `Err`.
    async fn process_audio_stream(
        &self,
        metadata: SpeechMetadata,
        mut stream: mpsc::Receiver<Vec<u8>>,
        cancel: &CancellationToken,
    ) -> Result<SpeechResult, Cancelled> {
        tracing::debug!(
            "Processing audio stream with language: {:?}, model: {}",
            metadata.language,
            self.engine().settings().model
        );

        let mut audio = Vec::new();
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(Cancelled),
                chunk = stream.recv() => match chunk {
                    Some(chunk) => audio.extend_from_slice(&chunk),
                    None => break,
                },
            }
        }

        let language = metadata
            .language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| self.default_language());

        match self.engine().transcribe(audio, Some(language), cancel).await {
            Ok(text) if !text.is_empty() => Ok(SpeechResult::success(text)),
            Ok(_) => {
                tracing::warn!("Transcription returned empty text");
                Ok(SpeechResult::error())
            }
            Err(TranscriptionError::Cancelled) => Err(Cancelled),
            Err(err) => {
                tracing::error!("Error processing audio: {err}");
                Ok(SpeechResult::error())
            }
        }
    }
}
