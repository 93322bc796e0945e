//! Config entries: one persisted provider configuration each.
//!
//! An entry keeps the values collected by the config flow in `data` and the values
//! edited later by the options flow in `options`. Options win over data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::transcription::model::DEFAULT_MODEL;
use crate::transcription::{ClientSettings, ResponseFormat, OPENAI_STT_URL};

/// Default language hint for new entries
pub const DEFAULT_LANGUAGE: &str = "en";

fn default_url() -> String {
    OPENAI_STT_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Values collected when the entry was created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl Default for EntryData {
    fn default() -> Self {
        Self {
            api_key: None,
            url: default_url(),
            model: default_model(),
            language: default_language(),
            response_format: ResponseFormat::default(),
        }
    }
}

/// Values edited after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryConfig {
    pub entry_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub data: EntryData,
    #[serde(default)]
    pub options: EntryOptions,
}

impl EntryConfig {
    /// Creates an entry with a fresh identifier and a title derived from its endpoint.
    pub fn new(data: EntryData) -> Self {
        Self {
            entry_id: uuid::Uuid::new_v4().to_string(),
            title: entry_title(&data.url, &data.model),
            created_at: Utc::now(),
            data,
            options: EntryOptions::default(),
        }
    }

    pub fn model(&self) -> &str {
        self.options.model.as_deref().unwrap_or(&self.data.model)
    }

    pub fn language(&self) -> &str {
        self.options.language.as_deref().unwrap_or(&self.data.language)
    }

    pub fn response_format(&self) -> ResponseFormat {
        self.options
            .response_format
            .unwrap_or(self.data.response_format)
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings::new(
            self.data.url.clone(),
            self.data.api_key.as_deref(),
            self.model(),
            Some(self.language()),
            self.response_format(),
        )
    }
}

/// Legacy static configuration: a single provider with a required key and the
/// default endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformConfig {
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl PlatformConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings::new(
            OPENAI_STT_URL,
            Some(self.api_key.as_str()),
            self.model.clone(),
            Some(self.language.as_str()),
            self.response_format,
        )
    }
}

/// Title shown for an entry: `OpenAI STT (<hostname>, <model>)`.
pub fn entry_title(url: &str, model: &str) -> String {
    let host = reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string());
    format!("OpenAI STT ({host}, {model})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_defaults() {
        let data = EntryData::default();
        assert_eq!(data.url, "https://api.openai.com/v1/audio/transcriptions");
        assert_eq!(data.model, "gpt-4o-mini-transcribe");
        assert_eq!(data.language, "en");
        assert_eq!(data.response_format, ResponseFormat::Text);
        assert_eq!(data.api_key, None);
    }

    #[test]
    fn test_entry_title_uses_hostname() {
        assert_eq!(
            entry_title("https://api.openai.com/v1/audio/transcriptions", "whisper-1"),
            "OpenAI STT (api.openai.com, whisper-1)"
        );
        assert_eq!(
            entry_title("http://192.168.1.20:8000/v1/audio/transcriptions", "large-v3"),
            "OpenAI STT (192.168.1.20, large-v3)"
        );
    }

    #[test]
    fn test_new_entry_has_unique_id() {
        let a = EntryConfig::new(EntryData::default());
        let b = EntryConfig::new(EntryData::default());
        assert_ne!(a.entry_id, b.entry_id);
        assert!(uuid::Uuid::parse_str(&a.entry_id).is_ok());
        assert_eq!(a.title, "OpenAI STT (api.openai.com, gpt-4o-mini-transcribe)");
    }

    #[test]
    fn test_options_override_data() {
        let mut entry = EntryConfig::new(EntryData::default());
        assert_eq!(entry.model(), "gpt-4o-mini-transcribe");

        entry.options = EntryOptions {
            model: Some("whisper-1".to_string()),
            language: Some("de".to_string()),
            response_format: Some(ResponseFormat::Json),
        };

        let settings = entry.client_settings();
        assert_eq!(settings.model, "whisper-1");
        assert_eq!(settings.language.as_deref(), Some("de"));
        assert_eq!(settings.response_format, ResponseFormat::Json);
        assert_eq!(settings.endpoint, entry.data.url);
    }

    #[test]
    fn test_platform_uses_default_endpoint() {
        let platform: PlatformConfig = toml::from_str(r#"api_key = "sk-test""#).unwrap();
        let settings = platform.client_settings();
        assert_eq!(settings.endpoint, OPENAI_STT_URL);
        assert_eq!(settings.api_key.as_deref(), Some("sk-test"));
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.language.as_deref(), Some("en"));
    }

    #[test]
    fn test_platform_requires_api_key() {
        assert!(toml::from_str::<PlatformConfig>(r#"model = "whisper-1""#).is_err());
    }
}
