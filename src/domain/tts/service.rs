use super::model::SpeechInput;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{AudioSink, TtsRepository, WebPageRepository};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    web_repo: Arc<WebPageRepository>,
    audio_sink: Arc<dyn AudioSink>,
    voice_id: String,
}

impl TtsService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        web_repo: Arc<WebPageRepository>,
        audio_sink: Arc<dyn AudioSink>,
        voice_id: String,
    ) -> Self {
        Self {
            tts_repo,
            web_repo,
            audio_sink,
            voice_id,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Convert the given input to audio files
    ///
    /// This operation:
    /// - Rejects a missing voice before any network activity
    /// - Synthesizes each chunk strictly in order, one request at a time
    /// - Writes one file per chunk before starting the next
    ///
    /// Returns the written file paths in chunk order. The first failure stops
    /// the run; files already written for earlier chunks are kept.
    async fn run(&self, input: SpeechInput) -> AppResult<Vec<PathBuf>>;

    /// Synthesize literal text into a single file
    async fn process_text(&self, text: &str) -> AppResult<Vec<PathBuf>>;

    /// Read a web page and synthesize each of its chunks into its own file
    async fn process_site(&self, url: &str) -> AppResult<Vec<PathBuf>>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn run(&self, input: SpeechInput) -> AppResult<Vec<PathBuf>> {
        if self.voice_id.is_empty() {
            return Err(AppError::Validation("voice ID is required".to_string()));
        }

        match input {
            SpeechInput::Text(text) => self.process_text(&text).await,
            SpeechInput::Site(url) => self.process_site(&url).await,
        }
    }

    async fn process_text(&self, text: &str) -> AppResult<Vec<PathBuf>> {
        tracing::info!(
            voice_id = %self.voice_id,
            text_length = text.chars().count(),
            "Synthesizing text input"
        );

        let path = self.synthesize_and_write(text).await?;
        Ok(vec![path])
    }

    async fn process_site(&self, url: &str) -> AppResult<Vec<PathBuf>> {
        let chunks = self.web_repo.fetch_and_chunk(url).await?;
        let total = chunks.len();
        let mut written = Vec::with_capacity(total);

        for (index, chunk) in chunks.iter().enumerate() {
            tracing::info!(
                chunk_index = index,
                chunk_count = total,
                chunk_length = chunk.chars().count(),
                "Synthesizing chunk"
            );

            let path = self.synthesize_and_write(chunk).await.map_err(|e| {
                tracing::error!(
                    error = %e,
                    kind = e.kind(),
                    chunk_index = index,
                    files_written = written.len(),
                    "Aborting remaining chunks"
                );
                e
            })?;
            written.push(path);
        }

        tracing::info!(url = %url, files_written = written.len(), "Website synthesized");
        Ok(written)
    }
}

impl TtsService {
    async fn synthesize_and_write(&self, text: &str) -> AppResult<PathBuf> {
        let result = self.tts_repo.synthesize(text, &self.voice_id).await?;
        self.audio_sink.write(&result.audio_data).await
    }
}
