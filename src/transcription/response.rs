//! Decoding of successful transcription responses.

use serde::Deserialize;

use super::error::AttemptError;
use super::request::ResponseFormat;

/// Response body for `response_format=json`
#[derive(Debug, Deserialize)]
struct JsonTranscription {
    text: String,
}

/// Decodes a 2xx body according to the requested response format.
///
/// JSON bodies must be an object with a string `text` field; anything else is an
/// unexpected response. Text bodies are returned verbatim.
pub fn decode(format: ResponseFormat, body: &[u8]) -> Result<String, AttemptError> {
    match format {
        ResponseFormat::Json => {
            let value: serde_json::Value = serde_json::from_slice(body)?;
            if value.get("text").is_none() {
                return Err(AttemptError::UnexpectedResponse(format!(
                    "JSON response has no `text` field: {value}"
                )));
            }
            let transcription: JsonTranscription = serde_json::from_value(value)?;
            Ok(transcription.text)
        }
        ResponseFormat::Text => Ok(String::from_utf8(body.to_vec())?),
    }
}
