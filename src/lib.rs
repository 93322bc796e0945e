//! OpenAI-compatible speech-to-text provider.
//!
//! The [`transcription`] module holds the blocking multipart client and the
//! worker-offloaded engine with bounded retry. [`provider`] adapts it to the host's
//! speech-to-text surface, and [`config`] and [`setup`] manage the persisted
//! entries the providers are built from.

pub mod app;
pub mod commands;
pub mod config;
pub mod logging;
pub mod provider;
pub mod setup;
pub mod transcription;
