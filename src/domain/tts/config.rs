use serde::{Deserialize, Serialize};

/// Voice parameters sent with every synthesis request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
}

/// Immutable provider settings, built once at startup and shared by reference
#[derive(Debug, Clone)]
pub struct SynthesisConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
    pub seed: Option<u32>,
    /// Maximum Unicode scalar values accepted in one request
    pub character_request_limit: usize,
}

impl SynthesisConfig {
    /// Synthesis URL for `voice_id`, escaped so it stays a single path segment
    pub fn speech_endpoint(&self, voice_id: &str) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.api_base_url,
            urlencoding::encode(voice_id)
        )
    }
}
