//! SeaORM entities mapping the journal tables.
//!
//! Each entity lives in its own module; `prelude` re-exports the common
//! aliases for convenient importing.

pub mod entry_tag;
pub mod journal_entry;
pub mod tag;
pub mod user;

pub mod prelude {
    pub use super::user::Entity as User;
    pub use super::user::Model as UserModel;
    pub use super::user::ActiveModel as UserActiveModel;
    pub use super::user::Column as UserColumn;

    pub use super::journal_entry::Entity as JournalEntry;
    pub use super::journal_entry::Model as JournalEntryModel;
    pub use super::journal_entry::ActiveModel as JournalEntryActiveModel;
    pub use super::journal_entry::Column as JournalEntryColumn;

    pub use super::tag::Entity as Tag;
    pub use super::tag::Model as TagModel;
    pub use super::tag::ActiveModel as TagActiveModel;
    pub use super::tag::Column as TagColumn;

    pub use super::entry_tag::Entity as EntryTag;
    pub use super::entry_tag::Model as EntryTagModel;
    pub use super::entry_tag::ActiveModel as EntryTagActiveModel;
    pub use super::entry_tag::Column as EntryTagColumn;
}
