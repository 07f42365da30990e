//! Data-access layer over the journal tables.
//!
//! Encapsulates the SeaORM queries so the rest of the application works with
//! domain models without knowing the underlying schema. Functions are
//! generic over [`sea_orm::ConnectionTrait`] so callers can run them against
//! the pool or inside a transaction.

pub mod entry_service;
pub mod tag_service;
pub mod user_service;

pub use entry_service::*;
pub use tag_service::*;
pub use user_service::*;
