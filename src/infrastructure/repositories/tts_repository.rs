use crate::domain::tts::SynthesisResult;
use crate::error::AppResult;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider.
///
/// Implementations are responsible for:
/// - Rejecting text longer than the provider accepts in one request
/// - Issuing exactly one provider call per invocation
/// - Returning the provider's audio unmodified
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize one chunk of text with the given voice
    ///
    /// Returns encoded audio (MP3 format)
    ///
    /// # Arguments
    /// * `text` - The chunk to synthesize, already within the provider's limit
    /// * `voice_id` - Provider voice identifier
    ///
    /// # Errors
    /// Validation errors are returned before any network activity
    async fn synthesize(&self, text: &str, voice_id: &str) -> AppResult<SynthesisResult>;
}
