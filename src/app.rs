//! Application orchestration and command routing.
//!
//! Handles command-line argument parsing and delegates to appropriate command handlers.

use crate::commands;
use crate::logging;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

/// Speech-to-text through OpenAI-compatible transcription endpoints
#[derive(Parser)]
#[command(name = "openai-stt")]
#[command(version)]
#[command(
    long_about = "Speech-to-text through OpenAI-compatible transcription endpoints.\n\nEXAMPLES:\n    # Add a provider\n    $ openai-stt setup\n    \n    # Transcribe a clip with the only configured provider\n    $ openai-stt transcribe clip.wav\n    \n    # Override the language for one request\n    $ openai-stt transcribe clip.wav --language fr\n    \n    # Change model or language of an entry later\n    $ openai-stt options 3f2a"
)]
#[command(
    after_help = "CONFIGURATION:\n    Config file:        ~/.config/openai-stt/openai-stt.toml (or $OPENAI_STT_CONFIG)\n    Logs:               ~/.local/state/openai-stt/openai-stt.log.*"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new provider entry
    ///
    /// Collects API key, endpoint, model, language and response format.
    Setup,

    /// Edit model, language and response format of an entry
    #[command(visible_alias = "o")]
    Options {
        /// Entry identifier or unique prefix
        #[arg(value_name = "ENTRY")]
        entry: String,
    },

    /// List configured providers
    #[command(visible_alias = "ls")]
    Entries,

    /// Transcribe an audio file
    ///
    /// Examples:
    ///   openai-stt transcribe recording.wav
    ///   openai-stt transcribe memo.mp3 --entry 3f2a -o memo.txt
    ///   openai-stt transcribe memo.ogg --platform --language de
    #[command(visible_alias = "t")]
    Transcribe {
        /// Path to the audio file to transcribe
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Entry identifier or unique prefix
        #[arg(short, long, value_name = "ENTRY", conflicts_with = "platform")]
        entry: Option<String>,

        /// Use the [platform] section of the config file
        #[arg(short, long)]
        platform: bool,

        /// Language for this request, overriding the provider default
        #[arg(short, long, value_name = "CODE")]
        language: Option<String>,

        /// Write transcription to file instead of stdout
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<String>,
    },

    /// Print supported audio formats, codecs, rates, channels and languages
    Capabilities,

    /// Show recent log entries
    Logs,

    /// Generate shell completion script
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Runs the application based on command-line arguments.
///
/// # Errors
/// - If logging initialization fails
/// - If command execution fails
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Commands that don't need logging
    match &cli.command {
        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "openai-stt", &mut io::stdout());
            return Ok(());
        }
        Commands::Logs => return commands::handle_logs(),
        Commands::Capabilities => {
            commands::handle_capabilities();
            return Ok(());
        }
        _ => {}
    }

    logging::init_logging()?;

    match cli.command {
        Commands::Setup => commands::handle_setup().await,
        Commands::Options { entry } => commands::handle_options(entry).await,
        Commands::Entries => commands::handle_entries(),
        Commands::Transcribe {
            file,
            entry,
            platform,
            language,
            output,
        } => commands::handle_transcribe(file, entry, platform, language, output).await,
        Commands::Completions { .. } | Commands::Logs | Commands::Capabilities => {
            unreachable!("These commands are handled earlier")
        }
    }
}
