//! Error types for the news API client.

use thiserror::Error;

use crate::models::ApiError;

/// Errors that can occur while talking to the news API.
#[derive(Debug, Error)]
pub enum NewsError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request never produced a readable response
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// API answered with an error payload
    #[error("News API error: {0}")]
    Api(ApiError),

    /// Body is not one of the known payloads
    #[error("Failed to decode response from '{endpoint}': {message}")]
    Decode { endpoint: String, message: String },
}

impl NewsError {
    /// Collapse into the code/message pair shown to the user.
    pub fn to_api_error(&self) -> ApiError {
        match self {
            NewsError::Api(error) => error.clone(),
            NewsError::Decode { .. } => ApiError::parse_error(),
            NewsError::Client(source) | NewsError::Transport { source, .. } => {
                ApiError::new(ApiError::NETWORK_ERROR, source.to_string())
            }
        }
    }
}

impl From<ApiError> for NewsError {
    fn from(error: ApiError) -> Self {
        NewsError::Api(error)
    }
}
