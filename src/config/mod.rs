//! Configuration management for openai-stt.
//!
//! This module handles the config entries created by the setup flow, their later
//! options, and the legacy platform section, all persisted in one TOML file in the
//! user's config directory.

pub mod entry;
pub mod file;

pub use entry::{entry_title, EntryConfig, EntryData, EntryOptions, PlatformConfig, DEFAULT_LANGUAGE};
pub use file::{get_config_path, SttConfig};
