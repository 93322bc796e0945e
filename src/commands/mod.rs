//! Application command handlers for openai-stt.
//!
//! # Commands
//! - `setup`: Create a config entry through the interactive config flow
//! - `options`: Edit model, language and response format of an entry
//! - `entries`: List configured providers
//! - `transcribe`: Transcribe an audio file through a configured provider
//! - `capabilities`: Print the advertised audio and language capabilities
//! - `logs`: Display recent log entries

pub mod capabilities;
pub mod entries;
pub mod logs;
pub mod options;
pub mod setup;
pub mod transcribe;

pub use capabilities::handle_capabilities;
pub use entries::handle_entries;
pub use logs::handle_logs;
pub use options::handle_options;
pub use setup::handle_setup;
pub use transcribe::handle_transcribe;
