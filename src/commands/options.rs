//! Edit model, language and response format of an existing entry.

use cliclack::{intro, note, outro};
use console::style;

use crate::config::SttConfig;
use crate::setup;

/// Runs the options flow for the entry matching `entry_query` and saves the result.
///
/// # Errors
/// - If the entry cannot be found
/// - If the flow is cancelled or the config cannot be saved
pub async fn handle_options(entry_query: String) -> anyhow::Result<()> {
    tracing::info!("=== openai-stt Options ===");

    let mut config = SttConfig::load()?;
    let entry = config.find_entry_mut(&entry_query)?;

    intro(style(" options ").on_white().black())?;
    note("entry", format!("{}\nid: {}", entry.title, entry.entry_id))?;

    let options = setup::run_options_flow(entry)?;
    entry.options = options;

    tracing::info!(
        "Updated options for entry {}: model={}, language={}, response_format={}",
        entry.entry_id,
        entry.model(),
        entry.language(),
        entry.response_format()
    );

    config.save()?;
    outro("✅ Options saved.")?;
    Ok(())
}
