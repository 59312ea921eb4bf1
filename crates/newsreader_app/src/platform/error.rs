use std::io;
use std::path::PathBuf;

use newsreader_engine::{EngineError, FetchError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid API base: {0}")]
    ApiBase(#[source] FetchError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
