//! Catalog records and user ratings.
//!
//! These models provide basic validation to keep downstream components
//! honest. Constructors return `Result` to surface invalid input early.

use thiserror::Error;

/// A single book from the catalog.
///
/// # Examples
///
/// ```
/// use bookscout_core::Book;
///
/// # fn main() -> Result<(), bookscout_core::BookError> {
/// let book = Book::new("0451526341", "Animal Farm", "George Orwell", 1996)?;
/// assert_eq!(book.isbn, "0451526341");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Book {
    /// Catalog key, unique within a catalog.
    pub isbn: String,
    /// Title text as published.
    pub title: String,
    /// Author name; matching against profiles is case-insensitive.
    pub author: String,
    /// Year of publication.
    pub year: i32,
}

/// Errors returned by [`Book::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    /// The ISBN was empty or whitespace.
    #[error("book must have a non-empty ISBN")]
    MissingIsbn,
    /// The title was empty or whitespace.
    #[error("book must have a non-empty title")]
    MissingTitle,
}

impl Book {
    /// Validates and constructs a [`Book`].
    ///
    /// # Errors
    /// Returns [`BookError`] when the ISBN or title is empty.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Result<Self, BookError> {
        let isbn = isbn.into();
        let title = title.into();
        if isbn.trim().is_empty() {
            return Err(BookError::MissingIsbn);
        }
        if title.trim().is_empty() {
            return Err(BookError::MissingTitle);
        }
        Ok(Self {
            isbn,
            title,
            author: author.into(),
            year,
        })
    }
}

/// One user's rating of one book.
///
/// At most one rating per `(user, book)` pair is assumed; the table does not
/// enforce it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rating {
    /// Identifier of the rating user.
    pub user_id: u64,
    /// ISBN of the rated book.
    pub isbn: String,
    /// Numeric score; the BX dumps use `0..=10`.
    pub score: u8,
}

impl Rating {
    /// Construct a rating row.
    #[must_use]
    pub fn new(user_id: u64, isbn: impl Into<String>, score: u8) -> Self {
        Self {
            user_id,
            isbn: isbn.into(),
            score,
        }
    }
}
