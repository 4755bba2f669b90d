use crate::error::{AppError, AppResult};

/// Encoded audio returned by one successful synthesis call
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisResult {
    pub audio_data: Vec<u8>,
}

impl SynthesisResult {
    pub fn new(audio_data: Vec<u8>) -> Self {
        Self { audio_data }
    }

    pub fn size(&self) -> usize {
        self.audio_data.len()
    }
}

/// Where the text to synthesize comes from. Exactly one source per run.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechInput {
    Text(String),
    Site(String),
}

impl SpeechInput {
    /// Pick the single input source. Empty strings count as unset.
    pub fn from_options(
        text: Option<String>,
        site: Option<String>,
    ) -> AppResult<Self> {
        let text = text.filter(|t| !t.is_empty());
        let site = site.filter(|s| !s.is_empty());

        match (text, site) {
            (Some(text), None) => Ok(Self::Text(text)),
            (None, Some(site)) => Ok(Self::Site(site)),
            (Some(_), Some(_)) => Err(AppError::Validation(
                "only one of text or site can be provided".to_string(),
            )),
            (None, None) => Err(AppError::Validation("text or site is required".to_string())),
        }
    }
}
