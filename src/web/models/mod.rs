use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::entities::{journal_entry, tag};

// --- Request Structs ---

#[derive(Deserialize, Debug)]
pub struct CreateEntryRequest {
    pub content: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTagsRequest {
    pub tag_names: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct PaginationQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

// --- Response Structs ---

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryResponse {
    pub entry_id: Uuid,
    pub guess_phrase: String,
    pub suggested_tags: Vec<String>,
    pub trigger_insight_nudge: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub id: Uuid,
    pub content: String,
    pub user_id: Uuid,
    pub sentiment_label: String,
    pub positive_score: f64,
    pub negative_score: f64,
    pub neutral_score: f64,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<tag::Model>,
}

impl EntryResponse {
    pub fn from_model(entry: journal_entry::Model, tags: Vec<tag::Model>) -> Self {
        Self {
            id: entry.id,
            content: entry.content,
            user_id: entry.user_id,
            sentiment_label: entry.sentiment_label,
            positive_score: entry.positive_score,
            negative_score: entry.negative_score,
            neutral_score: entry.neutral_score,
            created_at: entry.created_at,
            tags,
        }
    }
}

/// One page of a listing, Spring `Page`-shaped.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}
