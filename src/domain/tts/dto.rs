use super::config::{SynthesisConfig, VoiceSettings};
use serde::{Deserialize, Serialize};

/// Body for POST /v1/text-to-speech/{voice_id}
///
/// Every optional field is left off the wire when unset, so the common case
/// serializes to just `text`, `model_id` and `voice_settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pronunciation_dictionary_locators: Vec<PronunciationDictionaryLocator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_request_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_request_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PronunciationDictionaryLocator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation_dictionary_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

impl SynthesisRequest {
    /// Request for a single chunk with the configured defaults and nothing else
    pub fn from_chunk(text: &str, config: &SynthesisConfig) -> Self {
        Self::builder(text, config).build()
    }

    pub fn builder(text: &str, config: &SynthesisConfig) -> SynthesisRequestBuilder {
        SynthesisRequestBuilder {
            request: SynthesisRequest {
                text: text.to_string(),
                model_id: config.model_id.clone(),
                voice_settings: config.voice_settings.clone(),
                pronunciation_dictionary_locators: Vec::new(),
                seed: config.seed,
                previous_text: None,
                next_text: None,
                previous_request_ids: Vec::new(),
                next_request_ids: Vec::new(),
            },
        }
    }
}

pub struct SynthesisRequestBuilder {
    request: SynthesisRequest,
}

impl SynthesisRequestBuilder {
    pub fn seed(mut self, seed: u32) -> Self {
        self.request.seed = Some(seed);
        self
    }

    /// Text spoken before and after this chunk, used by the provider for prosody
    pub fn context(mut self, previous: Option<String>, next: Option<String>) -> Self {
        self.request.previous_text = previous;
        self.request.next_text = next;
        self
    }

    pub fn request_ids(mut self, previous: Vec<String>, next: Vec<String>) -> Self {
        self.request.previous_request_ids = previous;
        self.request.next_request_ids = next;
        self
    }

    pub fn pronunciation_dictionary(mut self, locator: PronunciationDictionaryLocator) -> Self {
        self.request.pronunciation_dictionary_locators.push(locator);
        self
    }

    pub fn build(self) -> SynthesisRequest {
        self.request
    }
}
