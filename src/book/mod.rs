//! # Book Store
//!
//! The in-memory book collection and its record types.
//!
//! # Operations
//!
//! - `upsert` - insert if the id is absent, otherwise replace or patch
//! - `delete` - remove by id; absent ids are a no-op
//! - `get` - look up by id
//! - `list` - all books, optionally filtered by a name substring

mod errors;
mod seed;
mod store;
mod types;

pub use errors::{StoreError, StoreResult};
pub use seed::default_books;
pub use store::BookStore;
pub use types::{Book, BookPatch, Upsert, UpsertOutcome};
