use async_trait::async_trait;
use thiserror::Error;

use super::SentimentScores;

pub mod azure;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Sentiment request failed: {0}")]
    RequestFailed(String),
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Narrow interface to a remote sentiment-scoring capability.
///
/// The gateway owns retry, caching and fallback policy; implementations only
/// perform a single scoring call and report failures faithfully.
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    /// Scores a single text, returning the confidence triple.
    async fn score(&self, text: &str) -> Result<SentimentScores, ProviderError>;
}
