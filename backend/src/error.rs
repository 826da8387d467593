use std::path::PathBuf;

use axum::http::header::InvalidHeaderValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("unknown ENVIRONMENT {0:?}, expected development or production")]
    UnknownEnvironment(String),
    #[error("no index.html in {0}, build the frontend with `trunk build --release` first")]
    MissingBundle(PathBuf),
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid response header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}
