use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set,
};
use tracing::info;

use crate::db::entities::{prelude::Tag, tag};

// --- Tag Service Functions ---

/// Finds a tag by its exact, case-sensitive name.
pub async fn find_tag_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<tag::Model>, DbErr> {
    Tag::find().filter(tag::Column::Name.eq(name)).one(db).await
}

/// Reuses the tag with the given name, or lazily creates it on first use.
/// Tags are never deleted by this service.
pub async fn find_or_create_tag<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<tag::Model, DbErr> {
    if let Some(existing) = find_tag_by_name(db, name).await? {
        return Ok(existing);
    }

    info!("Tag '{}' not found. Creating a new one.", name);
    let tag = tag::ActiveModel {
        name: Set(name.to_string()),
        user_id: Set(None),
        ..Default::default()
    };
    tag.insert(db).await
}
