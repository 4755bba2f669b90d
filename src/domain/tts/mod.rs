pub mod config;
pub mod dto;
pub mod model;
pub mod service;

pub use config::{SynthesisConfig, VoiceSettings};
pub use dto::{PronunciationDictionaryLocator, SynthesisRequest, SynthesisRequestBuilder};
pub use model::{SpeechInput, SynthesisResult};
pub use service::{TtsService, TtsServiceApi};
