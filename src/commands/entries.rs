//! List configured providers.

use console::style;

use crate::config::{get_config_path, SttConfig};
use crate::provider::platform::PLATFORM_UNIQUE_ID;

pub fn handle_entries() -> anyhow::Result<()> {
    let config = SttConfig::load()?;

    if config.entries.is_empty() && config.platform.is_none() {
        println!("No providers configured. Run 'openai-stt setup' to add one.");
        return Ok(());
    }

    for entry in &config.entries {
        println!("{}", style(&entry.title).bold());
        println!("  id:              {}", entry.entry_id);
        println!("  url:             {}", entry.data.url);
        println!("  model:           {}", entry.model());
        println!(
            "  language:        {}",
            if entry.language().is_empty() { "auto" } else { entry.language() }
        );
        println!("  response format: {}", entry.response_format());
        println!(
            "  api key:         {}",
            if entry.data.api_key.is_some() { "set" } else { "none" }
        );
        println!("  created:         {}", entry.created_at.format("%Y-%m-%d %H:%M"));
        println!();
    }

    if let Some(platform) = &config.platform {
        println!("{}", style("Platform provider").bold());
        println!("  id:              {PLATFORM_UNIQUE_ID}");
        println!("  model:           {}", platform.model);
        println!("  language:        {}", platform.language);
        println!("  response format: {}", platform.response_format);
        println!();
    }

    println!("Config file: {}", get_config_path()?.display());
    Ok(())
}
