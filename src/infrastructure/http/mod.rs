use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::time::Duration;

pub mod mock;

pub use mock::MockHttpDoer;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure to complete an HTTP exchange (DNS, connect, TLS, timeout, body read)
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Outbound request handed to an [`HttpDoer`]
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Fully buffered response. The connection is released before this is returned.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Minimal transport capability: perform one request, get a response or a transport error.
///
/// Any status code is a response, not an error. Callers decide what a non-success status means.
#[async_trait]
pub trait HttpDoer: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Timeouts for the production transport.
///
/// The connect timeout is short while the overall timeout is long because the
/// synthesis API withholds response headers until the audio is fully rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(3),
            request_timeout: Duration::from_secs(310),
        }
    }
}

/// [`HttpDoer`] backed by a shared `reqwest::Client`
pub struct ReqwestHttpDoer {
    client: reqwest::Client,
}

impl ReqwestHttpDoer {
    pub fn new(settings: &HttpSettings) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| TransportError::with_source("failed to build HTTP client", e))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpDoer for ReqwestHttpDoer {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            TransportError::with_source(format!("{} {} failed", request.method, request.url), e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            TransportError::with_source(
                format!("failed to read response body from {}", request.url),
                e,
            )
        })?;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status = status.as_u16(),
            body_size = body.len(),
            "HTTP exchange completed"
        );

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
