// ABOUTME: Error types for the podium application
// ABOUTME: Provides structured error handling for the build pipeline and remote loader

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PodiumError {
    #[error("Failed to read or write file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Failed to read path during discovery: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Failed to traverse directory: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Path not found: {0:?}")]
    PathNotFoundError(PathBuf),

    #[error("Malformed front matter in {path:?}: {message}")]
    FrontMatterError { path: PathBuf, message: String },

    #[error("Failed to fetch remote content: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Failed to load {file}: HTTP {status}")]
    ContentApiError { file: String, status: u16 },

    #[error("Malformed content API response: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to decode slide content: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("Slide content is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Watch error: {0}")]
    WatchError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our PodiumError
impl From<anyhow::Error> for PodiumError {
    fn from(err: anyhow::Error) -> Self {
        PodiumError::UnknownError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PodiumError>;
