//! Request and store counters
//!
//! - Counters reset only on process start
//! - Atomic, Relaxed ordering; values are exact but not a consistent cut

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Registry of operational counters, shared across handlers
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Requests handled
    requests: AtomicU64,
    /// Requests answered with a 4xx/5xx
    requests_rejected: AtomicU64,
    /// Upserts that inserted a new book
    books_created: AtomicU64,
    /// Upserts that changed an existing book
    books_updated: AtomicU64,
    /// Deletes that removed a book
    books_deleted: AtomicU64,
    /// Books currently stored
    books: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_requests(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_requests_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an upsert and the store size after it
    pub fn record_upsert(&self, created: bool, books: usize) {
        if created {
            self.books_created.fetch_add(1, Ordering::Relaxed);
        } else {
            self.books_updated.fetch_add(1, Ordering::Relaxed);
        }
        self.set_books(books);
    }

    /// Record a delete and the store size after it
    pub fn record_delete(&self, removed: bool, books: usize) {
        if removed {
            self.books_deleted.fetch_add(1, Ordering::Relaxed);
        }
        self.set_books(books);
    }

    pub fn set_books(&self, count: usize) {
        self.books.store(count as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            books_created: self.books_created.load(Ordering::Relaxed),
            books_updated: self.books_updated.load(Ordering::Relaxed),
            books_deleted: self.books_deleted.load(Ordering::Relaxed),
            books: self.books.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of every counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub requests_rejected: u64,
    pub books_created: u64,
    pub books_updated: u64,
    pub books_deleted: u64,
    pub books: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_zeroed() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.requests, 0);
        assert_eq!(snapshot.books_created, 0);
        assert_eq!(snapshot.books, 0);
    }

    #[test]
    fn test_record_upsert_splits_created_and_updated() {
        let registry = MetricsRegistry::new();
        registry.record_upsert(true, 6);
        registry.record_upsert(false, 6);
        registry.record_upsert(true, 7);

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.books_created, 2);
        assert_eq!(snapshot.books_updated, 1);
        assert_eq!(snapshot.books, 7);
    }

    #[test]
    fn test_record_delete_counts_only_removals() {
        let registry = MetricsRegistry::new();
        registry.set_books(5);
        registry.record_delete(false, 5);
        registry.record_delete(true, 4);

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.books_deleted, 1);
        assert_eq!(snapshot.books, 4);
    }

    #[test]
    fn test_snapshot_serializes() {
        let registry = MetricsRegistry::new();
        registry.increment_requests();
        registry.increment_requests_rejected();

        let value = serde_json::to_value(registry.snapshot()).unwrap();
        assert_eq!(value["requests"], 1);
        assert_eq!(value["requests_rejected"], 1);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let reg = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..100 {
                        reg.increment_requests();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.snapshot().requests, 800);
    }
}
