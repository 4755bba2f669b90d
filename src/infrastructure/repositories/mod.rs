pub mod audio_file_repository;
pub mod elevenlabs_tts_repository;
pub mod tts_repository;
pub mod web_page_repository;

pub use audio_file_repository::{AudioFileRepository, AudioSink};
pub use elevenlabs_tts_repository::ElevenLabsTtsRepository;
pub use tts_repository::TtsRepository;
pub use web_page_repository::WebPageRepository;
