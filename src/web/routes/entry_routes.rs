use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::services::journal_service;
use crate::web::models::{
    CreateEntryRequest, CreateEntryResponse, EntryResponse, PageResponse, PaginationQuery,
    UpdateTagsRequest,
};
use crate::web::{AppError, AppState};

const CONTENT_MIN_CHARS: usize = 10;
const CONTENT_MAX_CHARS: usize = 10_000;
const MAX_TAG_NAMES: usize = 20;
const TAG_NAME_MAX_CHARS: usize = 50;

const DEFAULT_PAGE_SIZE: u64 = 20;
const MAX_PAGE_SIZE: u64 = 100;

// --- Validation ---

fn validate_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::InvalidInput("Content cannot be empty".to_string()));
    }
    let length = content.chars().count();
    if !(CONTENT_MIN_CHARS..=CONTENT_MAX_CHARS).contains(&length) {
        return Err(AppError::InvalidInput(format!(
            "Content must be between {CONTENT_MIN_CHARS} and {CONTENT_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

fn validate_tag_names(tag_names: &[String]) -> Result<(), AppError> {
    if tag_names.is_empty() || tag_names.len() > MAX_TAG_NAMES {
        return Err(AppError::InvalidInput(format!(
            "Must have between 1 and {MAX_TAG_NAMES} tags"
        )));
    }
    for name in tag_names {
        let length = name.chars().count();
        if length == 0 || length > TAG_NAME_MAX_CHARS {
            return Err(AppError::InvalidInput(format!(
                "Tag name must be between 1 and {TAG_NAME_MAX_CHARS} characters"
            )));
        }
    }
    Ok(())
}

// --- Route Handlers ---

async fn create_entry_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<CreateEntryResponse>), AppError> {
    validate_content(&payload.content)?;
    info!(
        "Creating journal entry with content length: {}",
        payload.content.chars().count()
    );
    let response = journal_service::create_journal_entry(
        &app_state.db,
        &app_state.sentiment,
        &payload.content,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_entry_tags_handler(
    State(app_state): State<Arc<AppState>>,
    Path(entry_id): Path<Uuid>,
    Json(payload): Json<UpdateTagsRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    validate_tag_names(&payload.tag_names)?;
    let entry =
        journal_service::update_tags_for_entry(&app_state.db, entry_id, &payload.tag_names)
            .await?;
    Ok(Json(entry))
}

async fn list_entries_handler(
    State(app_state): State<Arc<AppState>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<PageResponse<EntryResponse>>, AppError> {
    let page = pagination.page.unwrap_or(0);
    let size = pagination
        .size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let entries = journal_service::list_entries(&app_state.db, page, size).await?;
    Ok(Json(entries))
}

async fn get_entry_handler(
    State(app_state): State<Arc<AppState>>,
    Path(entry_id): Path<Uuid>,
) -> Result<Json<EntryResponse>, AppError> {
    let entry = journal_service::get_entry_by_id(&app_state.db, entry_id).await?;
    Ok(Json(entry))
}

// --- Router ---

pub fn entries_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_entries_handler))
        .route("/create", post(create_entry_handler))
        .route("/{entry_id}", get(get_entry_handler))
        .route("/{entry_id}/tags", put(update_entry_tags_handler))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_length_bounds() {
        assert!(validate_content("a".repeat(10).as_str()).is_ok());
        assert!(validate_content("a".repeat(10_000).as_str()).is_ok());
        assert!(matches!(
            validate_content("Short"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_content("a".repeat(10_001).as_str()),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn blank_content_is_rejected_before_length_checks() {
        assert!(matches!(
            validate_content("          "),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn tag_list_bounds() {
        assert!(validate_tag_names(&["a".to_string()]).is_ok());
        assert!(validate_tag_names(&vec!["a".to_string(); 20]).is_ok());
        assert!(matches!(
            validate_tag_names(&[]),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_tag_names(&vec!["a".to_string(); 21]),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_tag_names(&["".to_string()]),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_tag_names(&["a".repeat(51)]),
            Err(AppError::InvalidInput(_))
        ));
    }
}
