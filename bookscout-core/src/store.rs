//! In-memory tables for books and ratings.
//!
//! Both tables are loaded once and treated as read-only for the rest of the
//! run. Iteration order is load order; the ranking stage's tie behaviour
//! depends on it.

use std::collections::HashMap;

use log::warn;

use crate::{Book, Rating};

/// Ordered book table with constant-time ISBN lookup.
///
/// Duplicate ISBNs keep the first row; later rows are logged and dropped.
///
/// # Examples
/// ```
/// use bookscout_core::{Book, Catalog};
///
/// # fn main() -> Result<(), bookscout_core::BookError> {
/// let catalog = Catalog::from_books(vec![
///     Book::new("1", "Dune", "Frank Herbert", 1965)?,
/// ]);
/// assert_eq!(catalog.get("1").map(|b| b.title.as_str()), Some("Dune"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    by_isbn: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from rows in load order.
    #[must_use]
    pub fn from_books(books: Vec<Book>) -> Self {
        let mut catalog = Self {
            books: Vec::with_capacity(books.len()),
            by_isbn: HashMap::with_capacity(books.len()),
        };
        for book in books {
            catalog.insert(book);
        }
        catalog
    }

    fn insert(&mut self, book: Book) {
        if self.by_isbn.contains_key(&book.isbn) {
            warn!("dropping duplicate catalog row for ISBN {}", book.isbn);
            return;
        }
        self.by_isbn.insert(book.isbn.clone(), self.books.len());
        self.books.push(book);
    }

    /// Look up a book by ISBN.
    #[must_use]
    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.by_isbn.get(isbn).and_then(|&idx| self.books.get(idx))
    }

    /// Iterate over books in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Number of books in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Report whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self::from_books(iter.into_iter().collect())
    }
}

/// Ordered rating rows.
///
/// Per-user filtering preserves row order, which keeps the top-rated
/// selection stable for tied scores.
#[derive(Debug, Clone, Default)]
pub struct RatingsTable {
    rows: Vec<Rating>,
}

impl RatingsTable {
    /// Build a table from rows in load order.
    #[must_use]
    pub const fn from_rows(rows: Vec<Rating>) -> Self {
        Self { rows }
    }

    /// Iterate over one user's ratings in row order.
    pub fn for_user(&self, user_id: u64) -> impl Iterator<Item = &Rating> {
        self.rows.iter().filter(move |row| row.user_id == user_id)
    }

    /// Iterate over all rows in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Rating> {
        self.rows.iter()
    }

    /// Number of rating rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Report whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<Rating> for RatingsTable {
    fn from_iter<I: IntoIterator<Item = Rating>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}
