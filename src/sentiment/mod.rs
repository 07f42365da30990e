//! Sentiment scoring, interpretation and response composition.
//!
//! The gateway ([`service::SentimentService`]) talks to the remote scoring
//! capability; [`interpreter`] turns raw scores into a discrete category;
//! [`composer`] turns a category into user-facing copy.

use serde::{Deserialize, Serialize};

pub mod composer;
pub mod interpreter;
pub mod provider;
pub mod service;

/// Provider-supplied confidence triple. Each component is in `[0, 1]`; the
/// three are not required to sum exactly to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// Scores used when the remote capability is unconfigured or failing:
/// unknown, lean neutral.
pub const FALLBACK_SCORES: SentimentScores = SentimentScores {
    positive: 0.33,
    negative: 0.33,
    neutral: 0.34,
};

/// Discrete sentiment of a journal entry, derived from [`SentimentScores`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl SentimentCategory {
    /// Lowercase label persisted with each entry.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "positive",
            SentimentCategory::Negative => "negative",
            SentimentCategory::Neutral => "neutral",
            SentimentCategory::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
