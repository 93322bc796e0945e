//! Create a new config entry.

use cliclack::{intro, outro};
use console::style;

use crate::config::{EntryConfig, SttConfig};
use crate::setup;

/// Runs the config flow and appends the resulting entry to the config file.
///
/// # Errors
/// - If the config file cannot be loaded or saved
/// - If the flow is cancelled
pub async fn handle_setup() -> anyhow::Result<()> {
    tracing::info!("=== openai-stt Setup ===");

    let mut config = SttConfig::load()?;

    intro(style(" setup ").on_white().black())?;

    let data = setup::run_config_flow()?;
    let entry = EntryConfig::new(data);

    tracing::info!(
        "Created entry {} ({}), model={}, language={}, response_format={}",
        entry.entry_id,
        entry.title,
        entry.model(),
        entry.language(),
        entry.response_format()
    );

    let summary = format!("{}\nid: {}", entry.title, entry.entry_id);
    config.entries.push(entry);
    config.save()?;

    outro(format!("✅ Entry saved: {summary}"))?;
    Ok(())
}
