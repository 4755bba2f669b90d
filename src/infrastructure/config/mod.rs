use crate::domain::tts::{SynthesisConfig, VoiceSettings};
use crate::error::{AppError, AppResult};
use crate::infrastructure::http::HttpSettings;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_MODEL_ID: &str = "eleven_monolingual_v1";
pub const DEFAULT_CHARACTER_REQUEST_LIMIT: usize = 10_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub output_dir: Option<PathBuf>,
    pub character_request_limit: usize,
    pub api_base_url: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
    pub seed: Option<u32>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load `.env` (if present) and read the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = get("XI_API_KEY")
            .ok_or_else(|| AppError::Config("API Key not found (XI_API_KEY)".to_string()))?;

        let character_request_limit = parse_or(
            get("CHARACTER_REQUEST_LIMIT"),
            "CHARACTER_REQUEST_LIMIT",
            DEFAULT_CHARACTER_REQUEST_LIMIT,
        )?;
        if character_request_limit == 0 {
            return Err(AppError::Config(
                "CHARACTER_REQUEST_LIMIT must be greater than zero".to_string(),
            ));
        }

        let voice_settings = VoiceSettings {
            stability: parse_or(get("VOICE_STABILITY"), "VOICE_STABILITY", 0.0)?,
            similarity_boost: parse_or(get("VOICE_SIMILARITY_BOOST"), "VOICE_SIMILARITY_BOOST", 0.0)?,
            style: parse_opt(get("VOICE_STYLE"), "VOICE_STYLE")?,
            use_speaker_boost: parse_opt(get("VOICE_SPEAKER_BOOST"), "VOICE_SPEAKER_BOOST")?,
        };

        let config = Config {
            api_key,
            output_dir: get("OUTPUT").map(PathBuf::from),
            character_request_limit,
            api_base_url: get("ELEVENLABS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model_id: get("ELEVENLABS_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            voice_settings,
            seed: parse_opt(get("ELEVENLABS_SEED"), "ELEVENLABS_SEED")?,
            connect_timeout_secs: parse_or(get("HTTP_CONNECT_TIMEOUT_SECS"), "HTTP_CONNECT_TIMEOUT_SECS", 3)?,
            request_timeout_secs: parse_or(get("HTTP_REQUEST_TIMEOUT_SECS"), "HTTP_REQUEST_TIMEOUT_SECS", 310)?,
            log_format: get("LOG_FORMAT")
                .map(|s| match s.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
        };

        Ok(config)
    }

    pub fn synthesis_config(&self) -> SynthesisConfig {
        SynthesisConfig {
            api_key: self.api_key.clone(),
            api_base_url: self.api_base_url.clone(),
            model_id: self.model_id.clone(),
            voice_settings: self.voice_settings.clone(),
            seed: self.seed,
            character_request_limit: self.character_request_limit,
        }
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

fn parse_opt<T: FromStr>(value: Option<String>, key: &str) -> AppResult<Option<T>> {
    value
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| AppError::Config(format!("{} has an invalid value: {}", key, raw)))
        })
        .transpose()
}

fn parse_or<T: FromStr>(value: Option<String>, key: &str, default: T) -> AppResult<T> {
    Ok(parse_opt(value, key)?.unwrap_or(default))
}
