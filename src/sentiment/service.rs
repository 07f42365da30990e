use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::provider::azure::AzureTextAnalytics;
use super::provider::SentimentProvider;
use super::{SentimentScores, FALLBACK_SCORES};
use crate::server::config::ServerConfig;

const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(1);
const CACHE_CAPACITY: usize = 10_000;

const PLACEHOLDER_KEY: &str = "your-azure-key-here";
const PLACEHOLDER_ENDPOINT: &str = "https://your-endpoint.cognitiveservices.azure.com/";

/// Gateway to the remote sentiment-scoring capability.
///
/// Never fails: a missing configuration, network errors and malformed
/// responses all degrade to [`FALLBACK_SCORES`]. Results are cached by text
/// hash; the cache is shared across concurrent requests.
pub struct SentimentService {
    provider: Option<Arc<dyn SentimentProvider>>,
    cache: DashMap<u64, SentimentScores>,
}

impl SentimentService {
    /// Builds the gateway from configuration. A missing or placeholder
    /// endpoint/credential pair leaves it permanently in fallback mode.
    pub fn from_config(config: &ServerConfig) -> Self {
        let endpoint = config.ai_endpoint.as_deref().unwrap_or("");
        let api_key = config.ai_key.as_deref().unwrap_or("");

        if !endpoint.is_empty()
            && endpoint != PLACEHOLDER_ENDPOINT
            && !api_key.is_empty()
            && api_key != PLACEHOLDER_KEY
        {
            info!("Remote sentiment service configured");
            Self::with_provider(Arc::new(AzureTextAnalytics::new(
                endpoint.to_string(),
                api_key.to_string(),
            )))
        } else {
            warn!("Remote sentiment service not configured. Using fallback sentiment analysis.");
            Self::fallback_only()
        }
    }

    /// Gateway backed by a specific provider.
    pub fn with_provider(provider: Arc<dyn SentimentProvider>) -> Self {
        Self {
            provider: Some(provider),
            cache: DashMap::new(),
        }
    }

    /// Gateway that always answers with the fallback scores.
    pub fn fallback_only() -> Self {
        Self {
            provider: None,
            cache: DashMap::new(),
        }
    }

    /// Scores a text. Repeated identical texts are answered from the cache
    /// without re-invoking the remote capability.
    pub async fn analyze_sentiment(&self, text: &str) -> SentimentScores {
        let key = cache_key(text);
        if let Some(cached) = self.cache.get(&key) {
            debug!("Sentiment cache hit");
            return *cached;
        }

        let scores = match &self.provider {
            Some(provider) => self.score_with_retry(provider.as_ref(), text).await,
            None => {
                info!("Using fallback sentiment analysis");
                FALLBACK_SCORES
            }
        };

        // Crude generational eviction: bounded memory, acceptable staleness.
        if self.cache.len() >= CACHE_CAPACITY {
            self.cache.clear();
        }
        self.cache.insert(key, scores);
        scores
    }

    /// Same contract as [`Self::analyze_sentiment`], returning a handle the
    /// caller may await. Dropping the handle does not cancel an already
    /// dispatched remote call.
    pub fn analyze_sentiment_spawned(self: &Arc<Self>, text: String) -> JoinHandle<SentimentScores> {
        let service = Arc::clone(self);
        tokio::spawn(async move { service.analyze_sentiment(&text).await })
    }

    async fn score_with_retry(
        &self,
        provider: &dyn SentimentProvider,
        text: &str,
    ) -> SentimentScores {
        for attempt in 1..=MAX_ATTEMPTS {
            match provider.score(text).await {
                Ok(scores) => return scores,
                Err(e) => {
                    warn!("Sentiment call failed (attempt {attempt}/{MAX_ATTEMPTS}): {e}");
                    if attempt < MAX_ATTEMPTS {
                        tokio::time::sleep(RETRY_DELAY).await;
                    }
                }
            }
        }
        error!("Remote sentiment service unavailable, falling back to neutral scores");
        FALLBACK_SCORES
    }
}

fn cache_key(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}
