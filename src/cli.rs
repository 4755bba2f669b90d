use crate::domain::tts::SpeechInput;
use crate::error::AppResult;
use clap::{ArgGroup, Parser};

/// An ElevenLabs client for text to voice
#[derive(Debug, Parser)]
#[command(
    name = "chatter",
    version,
    about = "An ElevenLabs client for text to voice",
    group(ArgGroup::new("input").required(true).args(["text", "site"]))
)]
pub struct Cli {
    /// Voice ID to use
    #[arg(short, long)]
    pub voice: String,

    /// Text to convert to voice
    #[arg(short, long)]
    pub text: Option<String>,

    /// Website to read text from
    #[arg(short, long)]
    pub site: Option<String>,
}

impl Cli {
    pub fn input(&self) -> AppResult<SpeechInput> {
        SpeechInput::from_options(self.text.clone(), self.site.clone())
    }
}
