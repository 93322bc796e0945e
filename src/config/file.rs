//! Configuration file management for openai-stt.
//!
//! This module handles loading and saving the TOML file that holds config entries
//! and the optional legacy platform section. The file lives in the user's config
//! directory unless `OPENAI_STT_CONFIG` points elsewhere.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::entry::{EntryConfig, PlatformConfig};
use crate::transcription::worker::DEFAULT_WORKERS;

/// Current schema version of the config file
pub const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "OPENAI_STT_CONFIG";

fn default_config_version() -> u32 {
    CONFIG_VERSION
}

fn default_worker_threads() -> usize {
    DEFAULT_WORKERS
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SttConfig {
    #[serde(default = "default_config_version")]
    pub config_version: u32,
    /// Maximum number of concurrent blocking transcription calls
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformConfig>,
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            config_version: CONFIG_VERSION,
            worker_threads: DEFAULT_WORKERS,
            platform: None,
            entries: Vec::new(),
        }
    }
}

impl SttConfig {
    /// Loads configuration from the user's config directory.
    ///
    /// # Errors
    /// - If the config directory cannot be determined
    /// - If the config file cannot be read or the TOML is malformed
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    /// Loads configuration from `path`. A missing file yields the defaults, and a
    /// file written by an older schema is migrated in place.
    ///
    /// # Errors
    /// - If the file cannot be read or the TOML is malformed
    /// - If a migrated file cannot be written back
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {e}", path.display()))?;
        let mut config: SttConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Invalid config file {}: {e}", path.display()))?;

        if config.config_version < CONFIG_VERSION {
            tracing::info!(
                "Migrating config from version {} to {}",
                config.config_version,
                CONFIG_VERSION
            );
            config.config_version = CONFIG_VERSION;
            config.save_to(path)?;
        } else if config.config_version > CONFIG_VERSION {
            tracing::warn!(
                "Config version {} is newer than supported version {}",
                config.config_version,
                CONFIG_VERSION
            );
        }

        Ok(config)
    }

    /// Saves configuration to the user's config directory.
    ///
    /// # Errors
    /// - If the config directory cannot be determined or created
    /// - If the file cannot be written
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Finds an entry by full identifier or unique identifier prefix.
    ///
    /// # Errors
    /// - If no entry matches
    /// - If the prefix matches more than one entry
    pub fn find_entry(&self, query: &str) -> anyhow::Result<&EntryConfig> {
        let index = self.entry_index(query)?;
        Ok(&self.entries[index])
    }

    pub fn find_entry_mut(&mut self, query: &str) -> anyhow::Result<&mut EntryConfig> {
        let index = self.entry_index(query)?;
        Ok(&mut self.entries[index])
    }

    fn entry_index(&self, query: &str) -> anyhow::Result<usize> {
        if let Some(index) = self.entries.iter().position(|e| e.entry_id == query) {
            return Ok(index);
        }

        let matches: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !query.is_empty() && e.entry_id.starts_with(query))
            .map(|(i, _)| i)
            .collect();

        match matches.as_slice() {
            [index] => Ok(*index),
            [] => Err(anyhow!(
                "No config entry matches '{query}'. Run 'openai-stt entries' to list them"
            )),
            _ => Err(anyhow!(
                "'{query}' matches {} entries, use a longer identifier",
                matches.len()
            )),
        }
    }
}

/// Retrieves the path to the config file.
///
/// # Errors
/// - If the home directory cannot be determined
pub fn get_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home
        .join(".config")
        .join("openai-stt")
        .join("openai-stt.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::entry::EntryData;
    use crate::transcription::ResponseFormat;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SttConfig::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, SttConfig::default());
        assert_eq!(config.worker_threads, 4);
    }

    #[test]
    fn test_save_and_load_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("openai-stt.toml");

        let mut config = SttConfig::default();
        let mut entry = EntryConfig::new(EntryData {
            api_key: Some("sk-test".to_string()),
            response_format: ResponseFormat::Json,
            ..EntryData::default()
        });
        entry.options.language = Some("fr".to_string());
        config.entries.push(entry);
        config.save_to(&path).unwrap();

        let loaded = SttConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.entries[0].language(), "fr");
        assert_eq!(loaded.entries[0].response_format(), ResponseFormat::Json);
    }

    #[test]
    fn test_partial_file_gets_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openai-stt.toml");
        fs::write(
            &path,
            r#"
config_version = 1

[platform]
api_key = "sk-platform"
response_format = "json"

[[entries]]
entry_id = "0b6f2a52-7d43-4a8e-9a57-0d0c6c1f1a11"
title = "OpenAI STT (localhost, whisper-1)"
created_at = "2024-05-01T12:00:00Z"

[entries.data]
url = "http://localhost:8000/v1/audio/transcriptions"
model = "whisper-1"
"#,
        )
        .unwrap();

        let config = SttConfig::load_from(&path).unwrap();
        let platform = config.platform.as_ref().unwrap();
        assert_eq!(platform.model, "gpt-4o-mini-transcribe");
        assert_eq!(platform.response_format, ResponseFormat::Json);

        let entry = &config.entries[0];
        assert_eq!(entry.language(), "en");
        assert_eq!(entry.response_format(), ResponseFormat::Text);
        assert_eq!(entry.data.api_key, None);
    }

    #[test]
    fn test_old_version_is_migrated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openai-stt.toml");
        fs::write(&path, "config_version = 0\n").unwrap();

        let config = SttConfig::load_from(&path).unwrap();
        assert_eq!(config.config_version, CONFIG_VERSION);

        let rewritten = fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains("config_version = 1"));
    }

    #[test]
    fn test_find_entry_by_prefix() {
        let mut config = SttConfig::default();
        let mut a = EntryConfig::new(EntryData::default());
        a.entry_id = "aaaa-1111".to_string();
        let mut b = EntryConfig::new(EntryData::default());
        b.entry_id = "aaab-2222".to_string();
        config.entries = vec![a, b];

        assert_eq!(config.find_entry("aaab").unwrap().entry_id, "aaab-2222");
        assert_eq!(config.find_entry("aaaa-1111").unwrap().entry_id, "aaaa-1111");
        assert!(config.find_entry("aaa").is_err());
        assert!(config.find_entry("zzz").is_err());
        assert!(config.find_entry("").is_err());

        config.find_entry_mut("aaaa").unwrap().options.model = Some("whisper-1".to_string());
        assert_eq!(config.entries[0].model(), "whisper-1");
    }
}
