use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ManifestError {
    #[error("Manifest parsing error: {0}")]
    Parse(String),

    #[error("Manifest I/O error: {0}")]
    Io(String),

    #[error("Invalid rule manifest: {0}")]
    Invalid(String),

    #[error("Unsupported manifest format: {0}")]
    UnsupportedFormat(String),
}

impl From<std::io::Error> for ManifestError {
    fn from(error: std::io::Error) -> Self {
        ManifestError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for ManifestError {
    fn from(error: serde_json::Error) -> Self {
        ManifestError::Parse(error.to_string())
    }
}

impl From<regex::Error> for ManifestError {
    fn from(error: regex::Error) -> Self {
        ManifestError::Invalid(error.to_string())
    }
}
