//! # Store Errors
//!
//! Error types for the book store.

use thiserror::Error;
use uuid::Uuid;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Book store errors
///
/// Lookups of absent ids and deletes of absent ids are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A patch targeted an absent id and carried no name, so no
    /// complete record can be created from it
    #[error("Cannot create book {0} from a patch without a name")]
    PatchWithoutName(Uuid),
}
