use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{ProviderError, SentimentProvider};
use crate::sentiment::SentimentScores;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Azure Text Analytics v3.1 sentiment endpoint.
pub struct AzureTextAnalytics {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl AzureTextAnalytics {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    fn sentiment_url(&self) -> String {
        format!(
            "{}/text/analytics/v3.1/sentiment",
            self.endpoint.trim_end_matches('/')
        )
    }
}

#[derive(Deserialize)]
struct SentimentResponse {
    documents: Vec<DocumentResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentResult {
    confidence_scores: ConfidenceScores,
}

#[derive(Deserialize)]
struct ConfidenceScores {
    positive: f64,
    negative: f64,
    neutral: f64,
}

#[async_trait]
impl SentimentProvider for AzureTextAnalytics {
    async fn score(&self, text: &str) -> Result<SentimentScores, ProviderError> {
        debug!("Calling remote sentiment service");
        let body = serde_json::json!({
            "documents": [{ "id": "1", "text": text }]
        });

        let response = self
            .client
            .post(self.sentiment_url())
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(ProviderError::RequestFailed(format!(
                "Sentiment service returned non-success status: {status}. Body: {error_body}"
            )));
        }

        let parsed: SentimentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;
        let document = parsed
            .documents
            .into_iter()
            .next()
            .ok_or_else(|| {
                ProviderError::MalformedResponse("response contained no documents".to_string())
            })?;

        Ok(SentimentScores {
            positive: document.confidence_scores.positive,
            negative: document.confidence_scores.negative,
            neutral: document.confidence_scores.neutral,
        })
    }
}
