use chatter::cli::Cli;
use chatter::domain::tts::{TtsService, TtsServiceApi};
use chatter::infrastructure::config::{Config, LogFormat};
use chatter::infrastructure::http::{HttpDoer, ReqwestHttpDoer};
use chatter::infrastructure::repositories::{
    AudioFileRepository, ElevenLabsTtsRepository, WebPageRepository,
};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    let input = cli.input()?;
    tracing::info!(voice_id = %cli.voice, "Starting chatter");

    // === DEPENDENCY INJECTION SETUP ===
    let synthesis_config = Arc::new(config.synthesis_config());
    let http: Arc<dyn HttpDoer> = Arc::new(ReqwestHttpDoer::new(&config.http_settings())?);

    let tts_repo = Arc::new(ElevenLabsTtsRepository::new(
        http.clone(),
        synthesis_config.clone(),
    ));
    let web_repo = Arc::new(WebPageRepository::new(
        http,
        synthesis_config.character_request_limit,
    ));
    let audio_sink = Arc::new(AudioFileRepository::new(config.output_dir.clone()));

    let tts_service = TtsService::new(tts_repo, web_repo, audio_sink, cli.voice.clone());

    let files = tts_service.run(input).await.map_err(|e| {
        if e.is_client_error() {
            tracing::warn!(error = %e, kind = e.kind(), "Run rejected");
        } else {
            tracing::error!(error = %e, kind = e.kind(), "Run failed");
        }
        e
    })?;

    tracing::info!(files_written = files.len(), "Done");
    for file in files {
        println!("{}", file.display());
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "chatter=info".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
