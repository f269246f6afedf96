//! Book HTTP Routes
//!
//! - `PUT /books` - full upsert
//! - `PATCH /books/:id` - partial upsert
//! - `DELETE /books/:id` - delete, no-op if absent
//! - `GET /books/:id` - book or `null`
//! - `GET /books?name=` - list, optional name substring filter

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::book::{Book, BookPatch, BookStore, Upsert, UpsertOutcome};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};

use super::errors::{parse_hyphenated, parse_id, ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Book store shared across handlers
///
/// Every read-modify-write runs under a single write-lock acquisition.
pub struct BooksState {
    store: RwLock<BookStore>,
    metrics: Arc<MetricsRegistry>,
}

impl BooksState {
    pub fn new(store: BookStore, metrics: Arc<MetricsRegistry>) -> Self {
        metrics.set_books(store.len());
        Self {
            store: RwLock::new(store),
            metrics,
        }
    }

    fn read(&self) -> ApiResult<RwLockReadGuard<'_, BookStore>> {
        self.store
            .read()
            .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))
    }

    fn write(&self) -> ApiResult<RwLockWriteGuard<'_, BookStore>> {
        self.store
            .write()
            .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))
    }

    pub fn upsert(&self, request: Upsert) -> ApiResult<UpsertOutcome> {
        let full_replace = request.is_full_replace();
        let mut store = self.write()?;
        let outcome = store.upsert(request)?;
        self.metrics.record_upsert(outcome.created, store.len());
        drop(store);

        let id = outcome.book.id.to_string();
        log_event_with_fields(
            Event::BookUpserted,
            &[
                ("created", bool_str(outcome.created)),
                ("full_replace", bool_str(full_replace)),
                ("id", id.as_str()),
            ],
        );
        Ok(outcome)
    }

    pub fn delete(&self, id: &Uuid) -> ApiResult<bool> {
        let mut store = self.write()?;
        let removed = store.delete(id);
        self.metrics.record_delete(removed, store.len());
        drop(store);

        let id = id.to_string();
        log_event_with_fields(
            Event::BookDeleted,
            &[("id", id.as_str()), ("removed", bool_str(removed))],
        );
        Ok(removed)
    }

    pub fn get(&self, id: &Uuid) -> ApiResult<Option<Book>> {
        Ok(self.read()?.get(id))
    }

    pub fn list(&self, name_filter: Option<&str>) -> ApiResult<Vec<Book>> {
        Ok(self.read()?.list(name_filter))
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

// ==================
// Request/Response Types
// ==================

/// `PUT /books` body; both fields required
#[derive(Debug, Deserialize)]
pub struct NewBook {
    #[serde(deserialize_with = "hyphenated_id")]
    pub id: Uuid,
    pub name: String,
}

/// `PATCH /books/:id` body; any subset of fields
#[derive(Debug, Default, Deserialize)]
pub struct PatchBook {
    #[serde(default, deserialize_with = "optional_hyphenated_id")]
    pub id: Option<Uuid>,
    pub name: Option<String>,
}

fn hyphenated_id<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_hyphenated(&raw)
        .ok_or_else(|| de::Error::custom(format!("id is not a hyphenated UUID: {raw}")))
}

fn optional_hyphenated_id<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_hyphenated(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("id is not a hyphenated UUID: {raw}"))),
        None => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

// ==================
// Book Routes
// ==================

pub fn book_routes(state: Arc<BooksState>) -> Router {
    Router::new()
        .route("/books", get(list_books_handler).put(put_book_handler))
        .route(
            "/books/:id",
            get(get_book_handler)
                .patch(patch_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

/// 201 when the upsert inserted, 200 when it updated
fn upsert_status(outcome: &UpsertOutcome) -> StatusCode {
    if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}

fn check_name(name: &str) -> ApiResult<()> {
    if name.is_empty() {
        return Err(ApiError::EmptyName);
    }
    Ok(())
}

// ==================
// Handlers
// ==================

async fn put_book_handler(
    State(state): State<Arc<BooksState>>,
    body: Result<Json<NewBook>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let Json(new_book) = body?;
    check_name(&new_book.name)?;

    let outcome = state.upsert(Upsert::Replace(Book::new(new_book.id, new_book.name)))?;
    Ok((upsert_status(&outcome), Json(outcome.book)))
}

async fn patch_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(raw_id): Path<String>,
    body: Result<Json<PatchBook>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let id = parse_id(&raw_id)?;
    let Json(patch) = body?;

    if let Some(body_id) = patch.id {
        if body_id != id {
            return Err(ApiError::IdMismatch { path: id, body: body_id });
        }
    }

    let mut book_patch = BookPatch::new(id);
    if let Some(name) = patch.name {
        check_name(&name)?;
        book_patch = book_patch.with_name(name);
    }

    let outcome = state.upsert(Upsert::Patch(book_patch))?;
    Ok((upsert_status(&outcome), Json(outcome.book)))
}

async fn delete_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_id(&raw_id)?;
    let deleted = state.delete(&id)?;
    Ok(Json(DeleteResponse { deleted }))
}

async fn get_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Option<Book>>> {
    let id = parse_id(&raw_id)?;
    Ok(Json(state.get(&id)?))
}

async fn list_books_handler(
    State(state): State<Arc<BooksState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Book>>> {
    let Query(query) = query?;
    // An empty filter matches every book anyway
    let filter = query.name.as_deref().filter(|name| !name.is_empty());
    Ok(Json(state.list(filter)?))
}
