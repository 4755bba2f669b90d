use crate::infrastructure::http::TransportError;
use reqwest::StatusCode;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("request failed: {status}, body: {body}")]
    Remote { status: StatusCode, body: String },

    #[error("failed to parse HTML: {0}")]
    Parse(String),

    #[error("failed to write audio: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True when the failure was caused by caller input rather than a collaborator
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Config(_))
    }

    /// Short classification used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Transport(_) => "transport",
            Self::Remote { .. } => "remote",
            Self::Parse(_) => "parse",
            Self::Io(_) => "io",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
