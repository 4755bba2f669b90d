use chatter::domain::tts::{SynthesisConfig, VoiceSettings};

pub const API_BASE_URL: &str = "https://api.elevenlabs.test";
pub const API_KEY: &str = "test-api-key";
pub const VOICE_ID: &str = "test-voice";
pub const SITE_URL: &str = "https://test.com";

pub fn speech_url(voice_id: &str) -> String {
    format!("{}/v1/text-to-speech/{}", API_BASE_URL, voice_id)
}

pub fn synthesis_config(character_request_limit: usize) -> SynthesisConfig {
    SynthesisConfig {
        api_key: API_KEY.to_string(),
        api_base_url: API_BASE_URL.to_string(),
        model_id: "eleven_monolingual_v1".to_string(),
        voice_settings: VoiceSettings::default(),
        seed: None,
        character_request_limit,
    }
}

/// Minimal MP3 frame header followed by a marker byte so payloads are distinguishable
pub fn mock_audio_bytes(marker: u8) -> Vec<u8> {
    vec![0xFF, 0xFB, 0x90, 0x00, marker]
}

pub fn page(body: &str) -> String {
    format!("<html><body>{}</body></html>", body)
}
