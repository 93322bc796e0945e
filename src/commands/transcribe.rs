//! Transcribe a pre-recorded audio file through a configured provider.
//!
//! The file is streamed in chunks into the provider exactly as a host would feed a
//! recognition request. Ctrl-C cancels the request.

use anyhow::anyhow;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::SttConfig;
use crate::provider::{EntryProvider, PlatformProvider, SpeechMetadata, SpeechToTextProvider};
use crate::transcription::capabilities::{
    AudioBitRate, AudioChannel, AudioCodec, AudioFormat, AudioSampleRate,
};
use crate::transcription::WorkerPool;

const CHUNK_SIZE: usize = 8 * 1024;

/// Handles transcription of a pre-recorded audio file.
///
/// # Arguments
/// * `file` - Path to the audio file to transcribe
/// * `entry` - Entry identifier or prefix; defaults to the only configured entry
/// * `platform` - Use the legacy platform provider instead of an entry
/// * `language` - Per-request language overriding the provider default
/// * `output_file` - Optional file path to write output to instead of stdout
pub async fn handle_transcribe(
    file: PathBuf,
    entry: Option<String>,
    platform: bool,
    language: Option<String>,
    output_file: Option<String>,
) -> anyhow::Result<()> {
    tracing::info!("=== openai-stt Transcribe Command ===");

    if !file.exists() {
        return Err(anyhow!("Audio file not found: {}", file.display()));
    }

    let config = SttConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {e}");
        anyhow!("Configuration error: {e}")
    })?;

    let pool = WorkerPool::new(config.worker_threads);
    let provider = select_provider(&config, entry.as_deref(), platform, pool)?;
    tracing::info!(
        "Transcribing {} with provider {} ({})",
        file.display(),
        provider.name(),
        provider.unique_id()
    );

    let metadata = speech_metadata(&file, language);
    tracing::debug!("Speech metadata: {:?}", metadata);

    let cancel = CancellationToken::new();
    let ctrl_c_token = cancel.clone();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, cancelling transcription");
            ctrl_c_token.cancel();
        }
    });

    let (tx, rx) = mpsc::channel(16);
    let reader = tokio::spawn(stream_file(file.clone(), tx));

    let result = provider.process_audio_stream(metadata, rx, &cancel).await;
    ctrl_c.abort();

    match reader.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(anyhow!("Failed to read audio file: {e}")),
        Err(e) => return Err(anyhow!("Audio reader task failed: {e}")),
    }

    let result = result.map_err(|_| anyhow!("Transcription cancelled"))?;
    if !result.is_success() {
        return Err(anyhow!(
            "Transcription failed. Run 'openai-stt logs' for details"
        ));
    }

    if let Some(file_path) = output_file {
        std::fs::write(&file_path, &result.text)
            .map_err(|e| anyhow!("Failed to write to file '{file_path}': {e}"))?;
        tracing::debug!("Transcribed text written to file: {file_path}");
    } else {
        println!("{}", result.text);
        tracing::debug!("Transcribed text printed to stdout");
    }

    Ok(())
}

/// Picks the provider for a request.
///
/// `--platform` selects the legacy section. Otherwise an explicit entry is looked
/// up, or the single configured entry is used, or the platform section if there
/// are no entries at all.
///
/// # Errors
/// - If the requested provider is not configured
/// - If several entries exist and none was named
pub fn select_provider(
    config: &SttConfig,
    entry: Option<&str>,
    platform: bool,
    pool: WorkerPool,
) -> anyhow::Result<Box<dyn SpeechToTextProvider>> {
    if platform {
        let platform = config
            .platform
            .as_ref()
            .ok_or_else(|| anyhow!("No [platform] section in the config file"))?;
        return Ok(Box::new(PlatformProvider::new(platform, pool)));
    }

    if let Some(query) = entry {
        return Ok(Box::new(EntryProvider::new(config.find_entry(query)?, pool)));
    }

    match (config.entries.as_slice(), config.platform.as_ref()) {
        ([only], _) => Ok(Box::new(EntryProvider::new(only, pool))),
        ([], Some(platform)) => Ok(Box::new(PlatformProvider::new(platform, pool))),
        ([], None) => Err(anyhow!(
            "No provider configured. Please run 'openai-stt setup'"
        )),
        (entries, _) => Err(anyhow!(
            "{} entries configured, choose one with --entry",
            entries.len()
        )),
    }
}

/// Describes the audio file for the provider. WAV headers are read for the real
/// sample rate, channel count and bit depth; other containers keep the defaults.
pub fn speech_metadata(file: &Path, language: Option<String>) -> SpeechMetadata {
    let mut metadata = SpeechMetadata {
        language,
        ..SpeechMetadata::default()
    };

    let Some(format) = file
        .extension()
        .and_then(|e| e.to_str())
        .and_then(AudioFormat::from_extension)
    else {
        tracing::warn!("Unknown audio container for {}, sending as-is", file.display());
        return metadata;
    };
    metadata.format = format;

    match format {
        AudioFormat::Wav => match hound::WavReader::open(file) {
            Ok(reader) => {
                let spec = reader.spec();
                metadata.codec = AudioCodec::Pcm;
                match AudioSampleRate::try_from(spec.sample_rate) {
                    Ok(rate) => metadata.sample_rate = rate,
                    Err(hz) => tracing::warn!("Unsupported sample rate {hz} Hz"),
                }
                match AudioChannel::try_from(spec.channels) {
                    Ok(channel) => metadata.channel = channel,
                    Err(n) => tracing::warn!("Unsupported channel count {n}"),
                }
                match AudioBitRate::try_from(spec.bits_per_sample) {
                    Ok(bits) => metadata.bit_rate = bits,
                    Err(bits) => tracing::warn!("Unsupported bit depth {bits}"),
                }
            }
            Err(e) => tracing::warn!("Failed to read WAV header of {}: {e}", file.display()),
        },
        AudioFormat::Mp3 => metadata.codec = AudioCodec::Mp3,
        AudioFormat::Ogg => metadata.codec = AudioCodec::Opus,
        AudioFormat::Mp4 => {}
    }

    metadata
}

async fn stream_file(path: PathBuf, tx: mpsc::Sender<Vec<u8>>) -> std::io::Result<()> {
    let mut file = tokio::fs::File::open(&path).await?;
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        if tx.send(buf[..n].to_vec()).await.is_err() {
            // Receiver gone: the request was cancelled
            return Ok(());
        }
    }
}
