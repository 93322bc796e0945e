//! Interactive config and options flows.
//!
//! The config flow collects everything needed for a new entry. The options flow
//! edits model, language and response format of an existing one. Both only collect
//! values; persisting them is up to the caller.

use anyhow::anyhow;
use cliclack::{input, log, password, select};

use crate::config::{EntryConfig, EntryData, EntryOptions, DEFAULT_LANGUAGE};
use crate::transcription::capabilities::supports_language;
use crate::transcription::model::DEFAULT_MODEL;
use crate::transcription::{ResponseFormat, TranscriptionModel, OPENAI_STT_URL};

/// Checks that an endpoint is an absolute http(s) URL with a host.
pub fn validate_url(url: &str) -> Result<(), String> {
    let parsed = reqwest::Url::parse(url.trim()).map_err(|e| format!("Invalid URL: {e}"))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(()),
        "http" | "https" => Err("URL has no host".to_string()),
        scheme => Err(format!("Unsupported URL scheme '{scheme}'")),
    }
}

/// Runs the config flow for a new entry.
///
/// # Errors
/// - If any prompt is cancelled
pub fn run_config_flow() -> anyhow::Result<EntryData> {
    let api_key: String = password("API key (press Enter for none):")
        .allow_empty()
        .interact()
        .map_err(|e| anyhow!("API key input cancelled: {e}"))?;

    let url: String = input("Transcription endpoint:")
        .default_input(OPENAI_STT_URL)
        .validate(|value: &String| validate_url(value))
        .interact()
        .map_err(|e| anyhow!("URL input cancelled: {e}"))?;

    let model = prompt_model(DEFAULT_MODEL)?;
    let language = prompt_language(DEFAULT_LANGUAGE)?;
    let response_format = prompt_response_format(ResponseFormat::default())?;

    Ok(EntryData {
        api_key: Some(api_key.trim().to_string()).filter(|k| !k.is_empty()),
        url: url.trim().to_string(),
        model,
        language,
        response_format,
    })
}

/// Runs the options flow for `entry`, starting from its current effective values.
///
/// # Errors
/// - If any prompt is cancelled
pub fn run_options_flow(entry: &EntryConfig) -> anyhow::Result<EntryOptions> {
    let model = prompt_model(entry.model())?;
    let language = prompt_language(entry.language())?;
    let response_format = prompt_response_format(entry.response_format())?;

    Ok(EntryOptions {
        model: Some(model),
        language: Some(language),
        response_format: Some(response_format),
    })
}

fn prompt_model(current: &str) -> anyhow::Result<String> {
    let known = TranscriptionModel::from_id(current);

    let mut prompt = select("Transcription model:");
    for model in TranscriptionModel::all() {
        prompt = prompt.item(Some(*model), model.id(), model.description());
    }
    prompt = prompt
        .item(None, "custom", "model served by a compatible endpoint")
        .initial_value(known);

    let selected: Option<TranscriptionModel> = prompt
        .interact()
        .map_err(|e| anyhow!("Model selection cancelled: {e}"))?;

    match selected {
        Some(model) => Ok(model.id().to_string()),
        None => {
            let custom: String = input("Model name:")
                .default_input(current)
                .validate(|value: &String| {
                    if value.trim().is_empty() {
                        Err("Model name cannot be empty")
                    } else {
                        Ok(())
                    }
                })
                .interact()
                .map_err(|e| anyhow!("Model input cancelled: {e}"))?;
            Ok(custom.trim().to_string())
        }
    }
}

fn prompt_language(current: &str) -> anyhow::Result<String> {
    let language: String = input("Language (ISO 639-1, empty for auto-detect):")
        .default_input(current)
        .required(false)
        .interact()
        .map_err(|e| anyhow!("Language input cancelled: {e}"))?;
    let language = language.trim().to_ascii_lowercase();

    if !language.is_empty() && !supports_language(&language) {
        log::warning(format!(
            "'{language}' is not a known language code; it will be sent as-is"
        ))?;
    }

    Ok(language)
}

fn prompt_response_format(current: ResponseFormat) -> anyhow::Result<ResponseFormat> {
    let mut prompt = select("Response format:");
    for format in ResponseFormat::all() {
        prompt = prompt.item(*format, format.as_str(), "");
    }
    prompt
        .initial_value(current)
        .interact()
        .map_err(|e| anyhow!("Response format selection cancelled: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url(OPENAI_STT_URL).is_ok());
        assert!(validate_url("http://localhost:8000/v1/audio/transcriptions").is_ok());
        assert!(validate_url(" https://example.com ").is_ok());
        assert!(validate_url("ftp://example.com/upload").is_err());
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("").is_err());
    }
}
