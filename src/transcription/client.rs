//! Blocking HTTP client for OpenAI-compatible transcription endpoints.
//!
//! Performs exactly one POST per call to [`TranscriptionClient::send`]. Retries,
//! cancellation and worker dispatch live in [`super::engine`]; this type must only
//! be called from a blocking worker thread, never from the async event loop.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::error::AttemptError;
use super::request::{normalize_credential, resolve_language, ResponseFormat, TranscriptionRequest};
use super::response;

/// Overall timeout of one attempt (connect and read combined)
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed configuration of a client, set once per configured provider.
#[derive(Clone)]
pub struct ClientSettings {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    /// Default language hint, used when a call carries no override
    pub language: Option<String>,
    pub response_format: ResponseFormat,
    pub timeout: Duration,
}

impl ClientSettings {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<&str>,
        model: impl Into<String>,
        language: Option<&str>,
        response_format: ResponseFormat,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: normalize_credential(api_key),
            model: model.into(),
            language: language
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            response_format,
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("language", &self.language)
            .field("response_format", &self.response_format)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Stateless transcription client. Cheap to clone and safe to share across calls.
#[derive(Debug, Clone)]
pub struct TranscriptionClient {
    settings: Arc<ClientSettings>,
}

impl TranscriptionClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Builds the request for one call, resolving the language against the default.
    pub fn request(&self, audio: Vec<u8>, language_override: Option<&str>) -> TranscriptionRequest {
        TranscriptionRequest {
            audio,
            model: self.settings.model.clone(),
            language: resolve_language(language_override, self.settings.language.as_deref()),
            response_format: self.settings.response_format,
            endpoint: self.settings.endpoint.clone(),
            credential: self.settings.api_key.clone(),
        }
    }

    /// Sends one blocking POST and decodes the reply.
    ///
    /// # Errors
    /// - If the client or form cannot be built
    /// - If the connection fails or the request times out
    /// - If the endpoint answers with a non-2xx status
    /// - If the body does not decode for the configured response format
    pub fn send(&self, request: &TranscriptionRequest) -> Result<String, AttemptError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(self.settings.timeout)
            .build()
            .map_err(AttemptError::Build)?;

        let form = request.form().map_err(AttemptError::Build)?;

        let debug_params: Vec<String> = request
            .text_fields()
            .into_iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        tracing::debug!(
            "Transcription API Call:\n  URL: {}\n  Method: POST\n  Headers:\n    Authorization: {}\n    Content-Type: multipart/form-data; boundary={}\n  Body parameters:\n    file={} ({} bytes)\n    {}",
            request.endpoint,
            if request.credential.is_some() { "Bearer <redacted>" } else { "<none>" },
            form.boundary(),
            super::request::AUDIO_FILE_NAME,
            request.audio.len(),
            debug_params.join("\n    ")
        );

        let mut builder = http.post(&request.endpoint).multipart(form);
        if let Some(credential) = &request.credential {
            builder = builder.bearer_auth(credential);
        }

        let response = builder.send().map_err(AttemptError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AttemptError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().map_err(AttemptError::from_reqwest)?;
        let text = response::decode(request.response_format, &body)?;

        tracing::debug!(
            "Transcription API Response:\n  Status: {}\n  Transcription length: {} characters",
            status,
            text.len()
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(language: Option<&str>) -> TranscriptionClient {
        TranscriptionClient::new(ClientSettings::new(
            "http://localhost:1/v1/audio/transcriptions",
            Some("abc"),
            "gpt-4o-mini-transcribe",
            language,
            ResponseFormat::Text,
        ))
    }

    #[test]
    fn test_request_uses_default_language() {
        let request = client(Some("en")).request(vec![0; 4], None);
        assert_eq!(request.language.as_deref(), Some("en"));
        assert_eq!(request.model, "gpt-4o-mini-transcribe");
        assert_eq!(request.credential.as_deref(), Some("abc"));
    }

    #[test]
    fn test_request_override_language() {
        let request = client(Some("en")).request(vec![0; 4], Some("sv"));
        assert_eq!(request.language.as_deref(), Some("sv"));
    }

    #[test]
    fn test_blank_default_language_is_absent() {
        let settings = ClientSettings::new("http://x", None, "whisper-1", Some(" "), ResponseFormat::Json);
        assert_eq!(settings.language, None);
        assert_eq!(settings.api_key, None);
        assert_eq!(settings.timeout, REQUEST_TIMEOUT);
    }

    #[test]
    fn test_settings_debug_redacts_key() {
        let rendered = format!("{:?}", client(None).settings());
        assert!(!rendered.contains("abc"));
    }
}
