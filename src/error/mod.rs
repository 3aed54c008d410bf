pub mod registry_error;
pub mod target_error;
pub mod manifest_error;

pub use registry_error::RegistryError;
pub use target_error::TargetError;
pub use manifest_error::ManifestError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Any failure surfaced by the crate's fallible operations.
///
/// Rule failures are never represented here: they are data
/// (`ValidationError`) returned by the engine.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum IntrospectError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Target(#[from] TargetError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Invalid engine configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IntrospectError>;
