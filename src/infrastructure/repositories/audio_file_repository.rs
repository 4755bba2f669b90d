use crate::error::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWrite, AsyncWriteExt};

const AUDIO_EXTENSION: &str = "mp3";
const DEFAULT_PREFIX: &str = "output_";

/// Destination for synthesized audio, one artifact per call
#[async_trait]
pub trait AudioSink: Send + Sync {
    /// Persist `audio` to a fresh location and return where it went
    async fn write(&self, audio: &[u8]) -> AppResult<PathBuf>;
}

/// Writes each audio payload to a new timestamp-named MP3 file.
///
/// Without an output directory files land in the working directory as
/// `output_<YYYYMMDD_HHMMSS>.mp3`; with one they are `<dir>/<YYYYMMDD_HHMMSS>.mp3`.
/// Files are never overwritten: a name already taken gets a `_<n>` suffix.
pub struct AudioFileRepository {
    output_dir: Option<PathBuf>,
}

impl AudioFileRepository {
    pub fn new(output_dir: Option<PathBuf>) -> Self {
        Self { output_dir }
    }

    fn candidate_path(&self, timestamp: &DateTime<Local>, attempt: usize) -> PathBuf {
        let stamp = timestamp.format("%Y%m%d_%H%M%S");
        let stem = match attempt {
            0 => format!("{}", stamp),
            n => format!("{}_{}", stamp, n),
        };

        match &self.output_dir {
            Some(dir) => dir.join(format!("{}.{}", stem, AUDIO_EXTENSION)),
            None => PathBuf::from(format!("{}{}.{}", DEFAULT_PREFIX, stem, AUDIO_EXTENSION)),
        }
    }

    async fn create_new(path: &Path, audio: &[u8]) -> std::io::Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await?;
        fill_or_discard(path, file, audio).await
    }
}

/// Write all of `audio` to `writer`, removing `path` if the write does not complete
async fn fill_or_discard<W>(path: &Path, mut writer: W, audio: &[u8]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written = match writer.write_all(audio).await {
        Ok(()) => writer.flush().await,
        Err(e) => Err(e),
    };
    let Err(e) = written else {
        return Ok(());
    };

    drop(writer);
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(remove_err) if remove_err.kind() == ErrorKind::NotFound => {}
        Err(remove_err) => {
            tracing::warn!(
                error = %remove_err,
                path = %path.display(),
                "failed to remove partial audio file"
            );
        }
    }

    Err(e)
}

#[async_trait]
impl AudioSink for AudioFileRepository {
    async fn write(&self, audio: &[u8]) -> AppResult<PathBuf> {
        if let Some(dir) = &self.output_dir {
            tokio::fs::create_dir_all(dir).await?;
        }

        let timestamp = Local::now();
        let mut attempt = 0;
        loop {
            let path = self.candidate_path(&timestamp, attempt);
            match Self::create_new(&path, audio).await {
                Ok(()) => {
                    tracing::info!(
                        path = %path.display(),
                        audio_size_bytes = audio.len(),
                        "Audio file written"
                    );
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => {
                    tracing::error!(error = %e, path = %path.display(), "failed to write audio file");
                    return Err(e.into());
                }
            }
        }
    }
}
