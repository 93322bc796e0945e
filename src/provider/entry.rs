//! Provider built from a config entry.

use crate::config::EntryConfig;
use crate::transcription::{model, SttEngine, WorkerPool};

use super::SpeechToTextProvider;

#[derive(Debug, Clone)]
pub struct EntryProvider {
    unique_id: String,
    name: String,
    engine: SttEngine,
}

impl EntryProvider {
    /// Builds the provider for `entry`, with its options merged over its data.
    pub fn new(entry: &EntryConfig, pool: WorkerPool) -> Self {
        let engine = SttEngine::new(entry.client_settings(), pool);
        tracing::info!(
            "Set up provider for entry {} ({})",
            entry.entry_id,
            entry.title
        );
        Self::from_engine(&entry.entry_id, engine)
    }

    pub fn from_engine(entry_id: &str, engine: SttEngine) -> Self {
        Self {
            unique_id: format!("{entry_id}_stt"),
            name: model::display_name(&engine.settings().model),
            engine,
        }
    }
}

#[async_trait::async_trait]
impl SpeechToTextProvider for EntryProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn default_language(&self) -> &str {
        self.engine.settings().language.as_deref().unwrap_or("")
    }

    fn engine(&self) -> &SttEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EntryData, EntryOptions};

    #[test]
    fn test_identity_from_entry() {
        let mut entry = EntryConfig::new(EntryData::default());
        entry.entry_id = "1234".to_string();
        entry.options = EntryOptions {
            model: Some("gpt-4o-transcribe".to_string()),
            language: Some("nl".to_string()),
            response_format: None,
        };

        let provider = EntryProvider::new(&entry, WorkerPool::new(1));
        assert_eq!(provider.unique_id(), "1234_stt");
        assert_eq!(provider.name(), "OpenAI transcribe");
        assert_eq!(provider.default_language(), "nl");
        assert_eq!(provider.supported_languages().len(), 57);
        assert_eq!(provider.supported_formats().len(), 4);
    }
}
