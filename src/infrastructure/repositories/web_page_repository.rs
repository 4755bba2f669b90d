use crate::domain::text::{chunk, extract_text};
use crate::error::{AppError, AppResult};
use crate::infrastructure::http::{HttpDoer, HttpRequest};
use reqwest::StatusCode;
use std::sync::Arc;

/// Reads a web page and turns its readable text into request-sized chunks
pub struct WebPageRepository {
    http: Arc<dyn HttpDoer>,
    character_request_limit: usize,
}

impl WebPageRepository {
    pub fn new(http: Arc<dyn HttpDoer>, character_request_limit: usize) -> Self {
        Self {
            http,
            character_request_limit,
        }
    }

    /// Fetch `url`, extract title/heading/paragraph text and split it into chunks
    pub async fn fetch_and_chunk(&self, url: &str) -> AppResult<Vec<String>> {
        tracing::info!(url = %url, "Fetching website");

        let response = self.http.execute(HttpRequest::get(url)).await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "failed to fetch website");
            AppError::from(e)
        })?;

        if response.status != StatusCode::OK {
            tracing::error!(
                url = %url,
                status = response.status.as_u16(),
                "failed to fetch website"
            );
            return Err(AppError::Remote {
                status: response.status,
                body: response.body_text(),
            });
        }

        let text = extract_text(&response.body)?;
        let chunks = chunk(&text, self.character_request_limit)?;

        tracing::info!(
            url = %url,
            text_length = text.chars().count(),
            chunk_count = chunks.len(),
            "Website text split into chunks"
        );

        Ok(chunks)
    }
}
