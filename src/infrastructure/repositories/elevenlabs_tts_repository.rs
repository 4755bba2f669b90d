use super::tts_repository::TtsRepository;
use crate::domain::tts::{SynthesisConfig, SynthesisRequest, SynthesisResult};
use crate::error::{AppError, AppResult};
use crate::infrastructure::http::{HttpDoer, HttpRequest};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;

/// ElevenLabs implementation of TTS repository
pub struct ElevenLabsTtsRepository {
    http: Arc<dyn HttpDoer>,
    config: Arc<SynthesisConfig>,
}

impl ElevenLabsTtsRepository {
    pub fn new(http: Arc<dyn HttpDoer>, config: Arc<SynthesisConfig>) -> Self {
        Self { http, config }
    }

    fn validate(&self, text: &str, voice_id: &str) -> AppResult<()> {
        if voice_id.is_empty() {
            return Err(AppError::Validation("voice ID is required".to_string()));
        }

        let count = text.chars().count();
        let limit = self.config.character_request_limit;
        if count > limit {
            return Err(AppError::Validation(format!(
                "text limit is {} characters, got: {}",
                limit, count
            )));
        }

        Ok(())
    }

    fn build_request(&self, text: &str, voice_id: &str) -> AppResult<HttpRequest> {
        let payload = SynthesisRequest::from_chunk(text, &self.config);
        let body = serde_json::to_vec(&payload)
            .map_err(|e| AppError::Internal(format!("failed to build payload: {}", e)))?;

        Ok(HttpRequest::post(self.config.speech_endpoint(voice_id), body)
            .header("Accept", "audio/mpeg")
            .header("Content-Type", "application/json")
            .header("xi-api-key", self.config.api_key.as_str()))
    }
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    async fn synthesize(&self, text: &str, voice_id: &str) -> AppResult<SynthesisResult> {
        self.validate(text, voice_id)?;

        let start_time = std::time::Instant::now();
        let request = self.build_request(text, voice_id)?;

        tracing::info!(
            voice_id = voice_id,
            model = %self.config.model_id,
            text_length = text.chars().count(),
            "Calling ElevenLabs text-to-speech API"
        );

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                voice_id = voice_id,
                "ElevenLabs request did not complete"
            );
            AppError::from(e)
        })?;

        if response.status != StatusCode::OK {
            let body = response.body_text();
            tracing::error!(
                status = response.status.as_u16(),
                body = %body,
                voice_id = voice_id,
                "ElevenLabs TTS API call failed"
            );
            return Err(AppError::Remote {
                status: response.status,
                body,
            });
        }

        let result = SynthesisResult::new(response.body);

        tracing::info!(
            provider = "elevenlabs",
            voice_id = voice_id,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = result.size(),
            "TTS synthesis completed"
        );

        Ok(result)
    }
}
