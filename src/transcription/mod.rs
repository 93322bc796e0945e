//! Transcription service for audio-to-text conversion.
//!
//! A blocking multipart client for OpenAI-compatible transcription endpoints, and
//! an async engine that runs it on a bounded worker pool with one retry and
//! prompt cancellation.

pub mod capabilities;
pub mod client;
pub mod engine;
pub mod error;
pub mod model;
pub mod request;
pub mod response;
pub mod worker;

pub use client::{ClientSettings, TranscriptionClient};
pub use engine::{RetryPolicy, SttEngine};
pub use error::{AttemptError, TranscriptionError};
pub use model::TranscriptionModel;
pub use request::{ResponseFormat, TranscriptionRequest};
pub use worker::WorkerPool;

/// Default transcription endpoint
pub const OPENAI_STT_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
