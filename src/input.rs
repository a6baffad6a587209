use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::info;

/// Failures while turning an exported file into transcript text.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Transcript not found at {0:?}")]
    NotFound(PathBuf),
    #[error("Unsupported file format {0:?}: export the chat as a .txt file")]
    UnsupportedFormat(String),
    #[error("Transcript at {0:?} is empty")]
    Empty(PathBuf),
    #[error("Transcript at {0:?} is not valid UTF-8")]
    InvalidEncoding(PathBuf),
    #[error("Failed to read transcript: {0}")]
    Io(#[from] std::io::Error),
}

const BYTE_ORDER_MARK: char = '\u{feff}';

pub fn read_transcript(path: &Path) -> Result<String, IngestError> {
    let start_time = Instant::now();

    if !path.exists() {
        return Err(IngestError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if extension != "txt" {
        return Err(IngestError::UnsupportedFormat(extension));
    }

    let bytes = fs::read(path)?;
    if bytes.is_empty() {
        return Err(IngestError::Empty(path.to_path_buf()));
    }

    let content =
        String::from_utf8(bytes).map_err(|_| IngestError::InvalidEncoding(path.to_path_buf()))?;
    let content = match content.strip_prefix(BYTE_ORDER_MARK) {
        Some(stripped) => stripped.to_string(),
        None => content,
    };

    info!(
        action = "complete",
        component = "transcript_reader",
        file_path = ?path,
        byte_count = content.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Transcript loaded"
    );
    Ok(content)
}
