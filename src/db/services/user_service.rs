use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryOrder, Set};
use tracing::warn;
use uuid::Uuid;

use crate::db::entities::{prelude::User, user};

// --- User Service Functions ---

/// Fixed identity of the placeholder actor used while the service runs
/// without authentication.
pub const PLACEHOLDER_EMAIL: &str = "dummyuser@example.com";

const PLACEHOLDER_CREDENTIAL: &str = "temporary_password";

/// Retrieves the earliest-created user, if any exist.
pub async fn find_earliest_user<C: ConnectionTrait>(db: &C) -> Result<Option<user::Model>, DbErr> {
    User::find()
        .order_by_asc(user::Column::CreatedAt)
        .one(db)
        .await
}

/// Creates the placeholder user that owns entries submitted without an
/// authenticated identity. The fixed credential is stored hashed.
pub async fn create_placeholder_user<C: ConnectionTrait>(db: &C) -> Result<user::Model, DbErr> {
    warn!("No users found. Creating a placeholder user for development.");
    let password_hash = bcrypt::hash(PLACEHOLDER_CREDENTIAL, bcrypt::DEFAULT_COST)
        .map_err(|e| DbErr::Custom(format!("Failed to hash placeholder credential: {e}")))?;

    let user = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(PLACEHOLDER_EMAIL.to_string()),
        password_hash: Set(password_hash),
        created_at: Set(Utc::now()),
    };
    user.insert(db).await
}
