//! Client error types.

use rinkside_providers::ProviderError;
use thiserror::Error;

use crate::secret::SecretError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A secret reference could not be expanded.
    #[error("failed to resolve api_key: {0}")]
    Secret(#[from] SecretError),

    /// Provider error.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Output could not be serialized.
    #[error("output error: {0}")]
    Output(String),
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("failed to parse config: {}", err))
    }
}
