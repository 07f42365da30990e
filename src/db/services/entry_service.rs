use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::db::entities::{
    entry_tag, journal_entry,
    prelude::{EntryTag, JournalEntry, Tag},
    tag,
};
use crate::sentiment::SentimentScores;

// --- Journal Entry Service Functions ---

/// Total number of entries ever recorded.
pub async fn count_entries<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    JournalEntry::find().count(db).await
}

/// Inserts a new journal entry carrying its interpreted sentiment label and
/// the raw confidence scores it was derived from.
pub async fn insert_entry<C: ConnectionTrait>(
    db: &C,
    content: &str,
    user_id: Uuid,
    sentiment_label: &str,
    scores: &SentimentScores,
) -> Result<journal_entry::Model, DbErr> {
    let entry = journal_entry::ActiveModel {
        id: Set(Uuid::new_v4()),
        content: Set(content.to_string()),
        user_id: Set(user_id),
        sentiment_label: Set(sentiment_label.to_string()),
        positive_score: Set(scores.positive),
        negative_score: Set(scores.negative),
        neutral_score: Set(scores.neutral),
        created_at: Set(Utc::now()),
        deleted_at: Set(None),
    };
    entry.insert(db).await
}

/// Retrieves an entry by its identifier.
pub async fn find_entry_by_id<C: ConnectionTrait>(
    db: &C,
    entry_id: Uuid,
) -> Result<Option<journal_entry::Model>, DbErr> {
    JournalEntry::find_by_id(entry_id).one(db).await
}

/// Retrieves one page of entries, newest first, along with the total
/// element count.
pub async fn list_entries<C: ConnectionTrait>(
    db: &C,
    page: u64,
    size: u64,
) -> Result<(Vec<journal_entry::Model>, u64), DbErr> {
    let paginator = JournalEntry::find()
        .order_by_desc(journal_entry::Column::CreatedAt)
        .paginate(db, size);
    let total = paginator.num_items().await?;
    let entries = paginator.fetch_page(page).await?;
    Ok((entries, total))
}

/// Tags currently attached to an entry.
pub async fn tags_for_entry<C: ConnectionTrait>(
    db: &C,
    entry: &journal_entry::Model,
) -> Result<Vec<tag::Model>, DbErr> {
    entry.find_related(Tag).all(db).await
}

/// Replaces the entire tag set of an entry. The previous associations are
/// discarded, never merged.
pub async fn replace_entry_tags<C: ConnectionTrait>(
    db: &C,
    entry_id: Uuid,
    tag_ids: &[i64],
) -> Result<(), DbErr> {
    EntryTag::delete_many()
        .filter(entry_tag::Column::EntryId.eq(entry_id))
        .exec(db)
        .await?;

    if tag_ids.is_empty() {
        return Ok(());
    }

    let links: Vec<entry_tag::ActiveModel> = tag_ids
        .iter()
        .map(|tag_id| entry_tag::ActiveModel {
            entry_id: Set(entry_id),
            tag_id: Set(*tag_id),
        })
        .collect();
    EntryTag::insert_many(links).exec_without_returning(db).await?;
    Ok(())
}
