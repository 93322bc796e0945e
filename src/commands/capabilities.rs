//! Print the capabilities advertised to the host.

use crate::transcription::capabilities::{
    SUPPORTED_BIT_RATES, SUPPORTED_CHANNELS, SUPPORTED_CODECS, SUPPORTED_FORMATS,
    SUPPORTED_LANGUAGES, SUPPORTED_SAMPLE_RATES,
};

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn handle_capabilities() {
    println!("formats:      {}", join(SUPPORTED_FORMATS));
    println!("codecs:       {}", join(SUPPORTED_CODECS));
    println!(
        "sample rates: {}",
        join(SUPPORTED_SAMPLE_RATES.iter().map(|r| r.hz()))
    );
    println!(
        "bit rates:    {}",
        join(SUPPORTED_BIT_RATES.iter().map(|b| b.bits()))
    );
    println!("channels:     {}", join(SUPPORTED_CHANNELS));
    println!("languages:    {}", join(SUPPORTED_LANGUAGES));
}
