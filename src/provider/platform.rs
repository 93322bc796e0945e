//! Provider built from the legacy `[platform]` config section.
//!
//! Unlike entries, the platform style always talks to the default OpenAI endpoint
//! and requires an API key.

use crate::config::PlatformConfig;
use crate::transcription::{SttEngine, WorkerPool};

use super::SpeechToTextProvider;

pub const PLATFORM_UNIQUE_ID: &str = "openai_stt_platform";

#[derive(Debug, Clone)]
pub struct PlatformProvider {
    engine: SttEngine,
}

impl PlatformProvider {
    pub fn new(config: &PlatformConfig, pool: WorkerPool) -> Self {
        tracing::info!("Set up platform provider with model {}", config.model);
        Self {
            engine: SttEngine::new(config.client_settings(), pool),
        }
    }

    pub fn from_engine(engine: SttEngine) -> Self {
        Self { engine }
    }
}

#[async_trait::async_trait]
impl SpeechToTextProvider for PlatformProvider {
    fn name(&self) -> &str {
        "OpenAI STT"
    }

    fn unique_id(&self) -> &str {
        PLATFORM_UNIQUE_ID
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
    use crate::transcription::{ResponseFormat, OPENAI_STT_URL};

    #[test]
    fn test_platform_provider_settings() {
        let config = PlatformConfig {
            api_key: "sk-test".to_string(),
            model: "whisper-1".to_string(),
            language: "it".to_string(),
            response_format: ResponseFormat::Json,
        };
        let provider = PlatformProvider::new(&config, WorkerPool::new(1));
        assert_eq!(provider.unique_id(), PLATFORM_UNIQUE_ID);
        assert_eq!(provider.default_language(), "it");
        assert_eq!(provider.engine().settings().endpoint, OPENAI_STT_URL);
        assert_eq!(provider.supported_channels().len(), 2);
    }
}
