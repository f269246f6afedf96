//! In-memory book store
//!
//! Books are kept in insertion order in a `Vec`. Every operation is a
//! linear scan; the collection is small and bounded by caller input.
//!
//! The store itself is not synchronized. Callers sharing it across
//! threads wrap it in a lock (see `http_server::book_routes::BooksState`).

use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::seed::default_books;
use super::types::{Book, Upsert, UpsertOutcome};

/// Ordered collection of books, at most one per id
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the default seed books
    pub fn seeded() -> Self {
        Self::with_books(default_books())
    }

    /// Create a store from a sequence of books
    ///
    /// Later books replace earlier ones with the same id.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut store = Self::new();
        for book in books {
            store.replace(book);
        }
        store
    }

    /// Number of stored books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Insert or update the book keyed by the request's id
    ///
    /// A full replace overwrites the stored record. A patch merges only
    /// the supplied fields. On an absent id either form inserts, except a
    /// patch without a name, which is rejected and leaves the store as is.
    pub fn upsert(&mut self, request: Upsert) -> StoreResult<UpsertOutcome> {
        let id = request.id();

        if let Some(index) = self.position(&id) {
            let book = &mut self.books[index];
            request.apply_to(book);
            return Ok(UpsertOutcome {
                book: book.clone(),
                created: false,
            });
        }

        let book = request
            .into_new_book()
            .ok_or(StoreError::PatchWithoutName(id))?;
        self.books.push(book.clone());

        Ok(UpsertOutcome {
            book,
            created: true,
        })
    }

    /// Full-replace upsert; never fails
    pub fn replace(&mut self, book: Book) -> UpsertOutcome {
        match self.position(&book.id) {
            Some(index) => {
                self.books[index] = book.clone();
                UpsertOutcome {
                    book,
                    created: false,
                }
            }
            None => {
                self.books.push(book.clone());
                UpsertOutcome {
                    book,
                    created: true,
                }
            }
        }
    }

    /// Remove the book with this id
    ///
    /// Returns whether a book was removed. Absent ids are a no-op.
    pub fn delete(&mut self, id: &Uuid) -> bool {
        match self.position(id) {
            Some(index) => {
                // Vec::remove keeps the relative order of the rest
                self.books.remove(index);
                true
            }
            None => false,
        }
    }

    /// Look up a book by id
    pub fn get(&self, id: &Uuid) -> Option<Book> {
        self.books.iter().find(|book| book.id == *id).cloned()
    }

    /// List books in insertion order
    ///
    /// With a filter, only books whose name contains it (case-sensitive)
    /// are returned.
    pub fn list(&self, name_filter: Option<&str>) -> Vec<Book> {
        match name_filter {
            Some(filter) => self
                .books
                .iter()
                .filter(|book| book.name.contains(filter))
                .cloned()
                .collect(),
            None => self.books.clone(),
        }
    }

    fn position(&self, id: &Uuid) -> Option<usize> {
        self.books.iter().position(|book| book.id == *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::types::BookPatch;

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = BookStore::new();
        assert!(store.is_empty());
        assert!(store.list(None).is_empty());
    }

    #[test]
    fn test_seeded_store_has_five_books() {
        let store = BookStore::seeded();
        assert_eq!(store.len(), 5);
        assert_eq!(store.list(None), default_books());
    }

    #[test]
    fn test_upsert_inserts_absent_id() {
        let mut store = BookStore::new();

        let outcome = store
            .upsert(Upsert::Replace(Book::new(id(1), "rust")))
            .unwrap();

        assert!(outcome.created);
        assert_eq!(outcome.book, Book::new(id(1), "rust"));
        assert_eq!(store.get(&id(1)), Some(Book::new(id(1), "rust")));
    }

    #[test]
    fn test_upsert_replaces_existing_in_place() {
        let mut store = BookStore::with_books([
            Book::new(id(1), "a"),
            Book::new(id(2), "b"),
            Book::new(id(3), "c"),
        ]);

        let outcome = store
            .upsert(Upsert::Replace(Book::new(id(2), "bb")))
            .unwrap();

        assert!(!outcome.created);
        assert_eq!(outcome.book.name, "bb");
        let names: Vec<_> = store.list(None).into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["a", "bb", "c"]);
    }

    #[test]
    fn test_patch_preserves_unspecified_fields() {
        let mut store = BookStore::with_books([Book::new(id(1), "a")]);

        let outcome = store.upsert(Upsert::Patch(BookPatch::new(id(1)))).unwrap();

        assert!(!outcome.created);
        assert_eq!(outcome.book.name, "a");
        assert_eq!(store.get(&id(1)).unwrap().name, "a");
    }

    #[test]
    fn test_patch_updates_supplied_fields() {
        let mut store = BookStore::with_books([Book::new(id(1), "a")]);

        store
            .upsert(Upsert::Patch(BookPatch::new(id(1)).with_name("z")))
            .unwrap();

        assert_eq!(store.get(&id(1)).unwrap().name, "z");
    }

    #[test]
    fn test_patch_with_name_inserts_absent_id() {
        let mut store = BookStore::new();

        let outcome = store
            .upsert(Upsert::Patch(BookPatch::new(id(4)).with_name("new")))
            .unwrap();

        assert!(outcome.created);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_patch_without_name_on_absent_id_is_rejected() {
        let mut store = BookStore::seeded();

        let err = store
            .upsert(Upsert::Patch(BookPatch::new(id(4))))
            .unwrap_err();

        assert_eq!(err, StoreError::PatchWithoutName(id(4)));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_repeated_upserts_keep_ids_unique() {
        let mut store = BookStore::new();
        for round in 0..3 {
            for n in 0..4 {
                store.replace(Book::new(id(n), format!("book {n} v{round}")));
            }
        }

        assert_eq!(store.len(), 4);
        assert_eq!(store.get(&id(3)).unwrap().name, "book 3 v2");
    }

    #[test]
    fn test_with_books_deduplicates_ids() {
        let store = BookStore::with_books([Book::new(id(1), "first"), Book::new(id(1), "second")]);
        assert_eq!(store.list(None), vec![Book::new(id(1), "second")]);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = BookStore::with_books([
            Book::new(id(1), "a"),
            Book::new(id(2), "b"),
            Book::new(id(3), "c"),
        ]);

        assert!(store.delete(&id(2)));

        assert_eq!(store.get(&id(2)), None);
        assert_eq!(
            store.list(None),
            vec![Book::new(id(1), "a"), Book::new(id(3), "c")]
        );
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut store = BookStore::seeded();
        let before = store.list(None);

        assert!(!store.delete(&id(99)));
        assert_eq!(store.list(None), before);
    }

    #[test]
    fn test_list_filter_is_case_sensitive_substring() {
        let store = BookStore::with_books([
            Book::new(id(1), "Clean Code"),
            Book::new(id(2), "clean architecture"),
            Book::new(id(3), "network"),
        ]);

        assert_eq!(store.list(Some("clean")), vec![Book::new(id(2), "clean architecture")]);
        assert_eq!(store.list(Some("e")).len(), 3);
        assert!(store.list(Some("rust")).is_empty());
    }

    #[test]
    fn test_get_returns_copy() {
        let store = BookStore::with_books([Book::new(id(1), "a")]);

        let mut copy = store.get(&id(1)).unwrap();
        copy.name.push_str(" changed");

        assert_eq!(store.get(&id(1)).unwrap().name, "a");
    }
}
