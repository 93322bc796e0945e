//! Transcription model definitions and metadata.
//!
//! Lists the models offered by the setup wizard. The configured model is stored
//! as a plain string, so custom identifiers for compatible endpoints still work.

use serde::{Deserialize, Serialize};

/// Default model for new entries
pub const DEFAULT_MODEL: &str = "gpt-4o-mini-transcribe";

/// Represents a known transcription model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TranscriptionModel {
    /// OpenAI Whisper model (legacy)
    Whisper,
    /// OpenAI GPT-4o Mini Transcribe model (faster, lighter)
    Gpt4oMiniTranscribe,
    /// OpenAI GPT-4o Transcribe model (best accuracy)
    Gpt4oTranscribe,
}

impl TranscriptionModel {
    /// Returns the model name sent to the API
    pub fn id(&self) -> &'static str {
        match self {
            TranscriptionModel::Whisper => "whisper-1",
            TranscriptionModel::Gpt4oMiniTranscribe => "gpt-4o-mini-transcribe",
            TranscriptionModel::Gpt4oTranscribe => "gpt-4o-transcribe",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TranscriptionModel::Whisper => "Whisper (legacy)",
            TranscriptionModel::Gpt4oMiniTranscribe => "GPT-4o Mini Transcribe (faster, lighter)",
            TranscriptionModel::Gpt4oTranscribe => "GPT-4o Transcribe (best accuracy)",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.id() == id)
    }

    pub fn all() -> &'static [Self] {
        &[
            TranscriptionModel::Whisper,
            TranscriptionModel::Gpt4oMiniTranscribe,
            TranscriptionModel::Gpt4oTranscribe,
        ]
    }
}

/// Provider display name derived from the model identifier: "OpenAI " followed by
/// the last dash-separated segment of the model.
pub fn display_name(model: &str) -> String {
    let suffix = model.rsplit('-').next().unwrap_or(model);
    format!("OpenAI {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_round_trip() {
        for model in TranscriptionModel::all() {
            assert_eq!(TranscriptionModel::from_id(model.id()), Some(*model));
        }
        assert_eq!(TranscriptionModel::from_id("whisper"), None);
    }

    #[test]
    fn test_default_model_is_known() {
        assert_eq!(
            TranscriptionModel::from_id(DEFAULT_MODEL),
            Some(TranscriptionModel::Gpt4oMiniTranscribe)
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("gpt-4o-mini-transcribe"), "OpenAI transcribe");
        assert_eq!(display_name("whisper-1"), "OpenAI 1");
        assert_eq!(display_name("custom"), "OpenAI custom");
    }
}
