//! Book record types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored book
///
/// Serializes as `{"id": "<uuid>", "name": "<name>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub name: String,
}

impl Book {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Fields to merge into the book keyed by `id`
///
/// `None` leaves the stored field unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPatch {
    pub id: Uuid,
    pub name: Option<String>,
}

impl BookPatch {
    pub fn new(id: Uuid) -> Self {
        Self { id, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build a full record from this patch, if every field is present
    fn into_book(self) -> Option<Book> {
        let name = self.name?;
        Some(Book { id: self.id, name })
    }

    /// Merge supplied fields into an existing record
    fn apply_to(self, book: &mut Book) {
        if let Some(name) = self.name {
            book.name = name;
        }
    }
}

/// An upsert request: full replacement or partial patch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upsert {
    /// Every field supplied; overwrites the stored record
    Replace(Book),
    /// Only supplied fields are merged into the stored record
    Patch(BookPatch),
}

impl Upsert {
    /// The id this upsert is keyed by
    pub fn id(&self) -> Uuid {
        match self {
            Upsert::Replace(book) => book.id,
            Upsert::Patch(patch) => patch.id,
        }
    }

    pub fn is_full_replace(&self) -> bool {
        matches!(self, Upsert::Replace(_))
    }

    /// Produce a new record for an absent id
    pub(crate) fn into_new_book(self) -> Option<Book> {
        match self {
            Upsert::Replace(book) => Some(book),
            Upsert::Patch(patch) => patch.into_book(),
        }
    }

    /// Apply to the record already stored under this id
    pub(crate) fn apply_to(self, book: &mut Book) {
        match self {
            Upsert::Replace(replacement) => *book = replacement,
            Upsert::Patch(patch) => patch.apply_to(book),
        }
    }
}

/// Result of an upsert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// The record as stored after the upsert
    pub book: Book,
    /// True if the id was absent and a record was inserted
    pub created: bool,
}
