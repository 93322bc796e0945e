//! Transcription request values and multipart form construction.
//!
//! A request is built once per call and turned into a fresh multipart form for
//! every transport attempt, so each attempt gets its own boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Filename given to the audio part of the upload
pub const AUDIO_FILE_NAME: &str = "audio.wav";

/// Content type of the audio part of the upload
pub const AUDIO_CONTENT_TYPE: &str = "audio/wav";

/// How the remote service should format its reply, and how we decode it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ResponseFormat {
    /// `{"text": "..."}` JSON object
    Json,
    /// Raw text body
    #[default]
    Text,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Text => "text",
        }
    }

    pub fn all() -> &'static [Self] {
        &[ResponseFormat::Json, ResponseFormat::Text]
    }
}

/// Anything other than `json` is decoded as plain text.
impl From<&str> for ResponseFormat {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            ResponseFormat::Json
        } else {
            ResponseFormat::Text
        }
    }
}

impl From<String> for ResponseFormat {
    fn from(value: String) -> Self {
        ResponseFormat::from(value.as_str())
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transcription call: the clip plus every parameter sent with it.
#[derive(Clone)]
pub struct TranscriptionRequest {
    pub audio: Vec<u8>,
    pub model: String,
    /// Resolved language hint. `None` lets the service auto-detect.
    pub language: Option<String>,
    pub response_format: ResponseFormat,
    pub endpoint: String,
    pub credential: Option<String>,
}

impl TranscriptionRequest {
    /// Text fields of the form in the order they are sent, after the `file` part.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("model", self.model.clone()),
            ("response_format", self.response_format.as_str().to_string()),
        ];
        if let Some(language) = &self.language {
            fields.push(("language", language.clone()));
        }
        fields
    }

    /// Builds the multipart body for one attempt.
    ///
    /// # Errors
    /// - If the audio content type cannot be parsed
    pub fn form(&self) -> Result<reqwest::blocking::multipart::Form, reqwest::Error> {
        let file_part = reqwest::blocking::multipart::Part::bytes(self.audio.clone())
            .file_name(AUDIO_FILE_NAME)
            .mime_str(AUDIO_CONTENT_TYPE)?;

        let form = self
            .text_fields()
            .into_iter()
            .fold(
                reqwest::blocking::multipart::Form::new().part("file", file_part),
                |form, (name, value)| form.text(name, value),
            );

        Ok(form)
    }
}

impl fmt::Debug for TranscriptionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscriptionRequest")
            .field("audio_bytes", &self.audio.len())
            .field("model", &self.model)
            .field("language", &self.language)
            .field("response_format", &self.response_format)
            .field("endpoint", &self.endpoint)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Picks the language for one call: a non-empty override wins over the configured
/// default, and an empty result means no `language` part is sent.
pub fn resolve_language(language_override: Option<&str>, default: Option<&str>) -> Option<String> {
    [language_override, default]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|language| !language.is_empty())
        .map(str::to_string)
}

/// Treats blank credentials as absent so no empty `Authorization` header is sent.
pub fn normalize_credential(credential: Option<&str>) -> Option<String> {
    credential
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}
