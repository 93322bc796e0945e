//! Static capability declarations reported to the host.
//!
//! These describe what the remote service accepts. Nothing here is enforced by the
//! client; audio is forwarded as-is.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Wav,
    Mp3,
    Mp4,
    Ogg,
}

impl AudioFormat {
    /// Maps a file extension to a container format
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "wav" => Some(AudioFormat::Wav),
            "mp3" => Some(AudioFormat::Mp3),
            "mp4" | "m4a" => Some(AudioFormat::Mp4),
            "ogg" | "oga" | "opus" => Some(AudioFormat::Ogg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AudioCodec {
    #[default]
    Pcm,
    Mp3,
    Opus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AudioChannel {
    #[default]
    Mono,
    Stereo,
}

impl TryFrom<u16> for AudioChannel {
    type Error = u16;

    fn try_from(channels: u16) -> Result<Self, Self::Error> {
        match channels {
            1 => Ok(AudioChannel::Mono),
            2 => Ok(AudioChannel::Stereo),
            other => Err(other),
        }
    }
}

/// Sample rate in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AudioSampleRate {
    Hz8000,
    #[default]
    Hz16000,
    Hz24000,
    Hz44100,
    Hz48000,
}

impl AudioSampleRate {
    pub fn hz(&self) -> u32 {
        match self {
            AudioSampleRate::Hz8000 => 8000,
            AudioSampleRate::Hz16000 => 16000,
            AudioSampleRate::Hz24000 => 24000,
            AudioSampleRate::Hz44100 => 44100,
            AudioSampleRate::Hz48000 => 48000,
        }
    }
}

impl TryFrom<u32> for AudioSampleRate {
    type Error = u32;

    fn try_from(hz: u32) -> Result<Self, Self::Error> {
        SUPPORTED_SAMPLE_RATES
            .iter()
            .copied()
            .find(|rate| rate.hz() == hz)
            .ok_or(hz)
    }
}

/// Bit depth of PCM samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AudioBitRate {
    Bits8,
    #[default]
    Bits16,
    Bits24,
}

impl AudioBitRate {
    pub fn bits(&self) -> u16 {
        match self {
            AudioBitRate::Bits8 => 8,
            AudioBitRate::Bits16 => 16,
            AudioBitRate::Bits24 => 24,
        }
    }
}

impl TryFrom<u16> for AudioBitRate {
    type Error = u16;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        SUPPORTED_BIT_RATES
            .iter()
            .copied()
            .find(|rate| rate.bits() == bits)
            .ok_or(bits)
    }
}

pub const SUPPORTED_FORMATS: &[AudioFormat] = &[
    AudioFormat::Wav,
    AudioFormat::Mp3,
    AudioFormat::Mp4,
    AudioFormat::Ogg,
];

pub const SUPPORTED_CODECS: &[AudioCodec] = &[AudioCodec::Pcm, AudioCodec::Mp3, AudioCodec::Opus];

pub const SUPPORTED_SAMPLE_RATES: &[AudioSampleRate] = &[
    AudioSampleRate::Hz8000,
    AudioSampleRate::Hz16000,
    AudioSampleRate::Hz24000,
    AudioSampleRate::Hz44100,
    AudioSampleRate::Hz48000,
];

pub const SUPPORTED_BIT_RATES: &[AudioBitRate] = &[
    AudioBitRate::Bits8,
    AudioBitRate::Bits16,
    AudioBitRate::Bits24,
];

pub const SUPPORTED_CHANNELS: &[AudioChannel] = &[AudioChannel::Mono, AudioChannel::Stereo];

/// ISO 639-1 codes accepted by the transcription service
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "af", "ar", "hy", "az", "be", "bs", "bg", "ca", "zh", "hr", "cs", "da", "nl", "en",
    "et", "fi", "fr", "gl", "de", "el", "he", "hi", "hu", "is", "id", "it", "ja", "kn",
    "kk", "ko", "lv", "lt", "mk", "ms", "mr", "mi", "ne", "no", "fa", "pl", "pt", "ro",
    "ru", "sr", "sk", "sl", "es", "sw", "sv", "tl", "ta", "th", "tr", "uk", "ur", "vi", "cy",
];

pub fn supports_language(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&code.trim().to_ascii_lowercase().as_str())
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Mp4 => "mp4",
            AudioFormat::Ogg => "ogg",
        };
        f.write_str(name)
    }
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AudioCodec::Pcm => "pcm",
            AudioCodec::Mp3 => "mp3",
            AudioCodec::Opus => "opus",
        };
        f.write_str(name)
    }
}

impl fmt::Display for AudioChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioChannel::Mono => f.write_str("mono"),
            AudioChannel::Stereo => f.write_str("stereo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_list() {
        assert_eq!(SUPPORTED_LANGUAGES.len(), 57);
        assert!(supports_language("en"));
        assert!(supports_language("JA"));
        assert!(!supports_language("xx"));
    }

    #[test]
    fn test_sample_rates() {
        let rates: Vec<u32> = SUPPORTED_SAMPLE_RATES.iter().map(|r| r.hz()).collect();
        assert_eq!(rates, vec![8000, 16000, 24000, 44100, 48000]);
        assert_eq!(AudioSampleRate::try_from(44100), Ok(AudioSampleRate::Hz44100));
        assert_eq!(AudioSampleRate::try_from(22050), Err(22050));
    }

    #[test]
    fn test_bit_rates_and_channels() {
        assert_eq!(AudioBitRate::try_from(24), Ok(AudioBitRate::Bits24));
        assert_eq!(AudioBitRate::try_from(32), Err(32));
        assert_eq!(AudioChannel::try_from(2), Ok(AudioChannel::Stereo));
        assert_eq!(AudioChannel::try_from(6), Err(6));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(AudioFormat::from_extension("WAV"), Some(AudioFormat::Wav));
        assert_eq!(AudioFormat::from_extension("m4a"), Some(AudioFormat::Mp4));
        assert_eq!(AudioFormat::from_extension("flac"), None);
    }
}
