//! Taste profiles derived from a user's highest-rated books.
//!
//! A profile is ephemeral: it is built for one recommendation session and
//! discarded after the session's results are written.

use std::collections::HashSet;

use log::warn;

use crate::{Book, Catalog, RatingsTable, StopWords, extract_keywords};

/// How many top-rated books seed a profile by default.
pub const DEFAULT_TOP_RATED: usize = 3;

/// A user's taste signature: title keywords, authors, and publication years
/// drawn from their top-rated books, plus the full set of rated ISBNs to
/// exclude from candidate scoring.
///
/// # Examples
/// ```
/// use bookscout_core::{Book, Catalog, Rating, RatingsTable, StopWords, TasteProfile};
///
/// # fn main() -> Result<(), bookscout_core::BookError> {
/// let catalog = Catalog::from_books(vec![
///     Book::new("1", "The Winter King", "Bernard Cornwell", 1996)?,
/// ]);
/// let ratings = RatingsTable::from_rows(vec![Rating::new(42, "1", 9)]);
/// let profile = TasteProfile::build(42, &ratings, &catalog, 3, &StopWords::english());
/// assert_eq!(profile.keywords(), ["winter", "king"]);
/// assert!(profile.excludes("1"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TasteProfile {
    keywords: Vec<String>,
    authors: HashSet<String>,
    years: HashSet<i32>,
    rated: HashSet<String>,
    top_books: Vec<Book>,
}

impl TasteProfile {
    /// Derive a profile from the user's top-rated books.
    ///
    /// Ratings are sorted by score descending with ties kept in row order,
    /// and the first `top_n` rows are resolved against `catalog`. A rated
    /// ISBN missing from the catalog is a data-quality gap: it is logged and
    /// contributes nothing. A user with no ratings yields an empty profile;
    /// downstream similarity degrades to the year and author terms only.
    #[must_use]
    pub fn build(
        user_id: u64,
        ratings: &RatingsTable,
        catalog: &Catalog,
        top_n: usize,
        stop_words: &StopWords,
    ) -> Self {
        let mut rows: Vec<_> = ratings.for_user(user_id).collect();
        let rated: HashSet<String> = rows.iter().map(|row| row.isbn.clone()).collect();
        rows.sort_by(|a, b| b.score.cmp(&a.score));
        rows.truncate(top_n);

        let mut top_books = Vec::with_capacity(rows.len());
        for row in rows {
            match catalog.get(&row.isbn) {
                Some(book) => top_books.push(book.clone()),
                None => warn!(
                    "rated ISBN {} for user {user_id} is missing from the catalog",
                    row.isbn
                ),
            }
        }

        let mut profile = Self {
            rated,
            ..Self::default()
        };
        for book in top_books {
            for keyword in extract_keywords(&book.title, stop_words) {
                profile.push_keyword(keyword);
            }
            profile.authors.insert(book.author.to_lowercase());
            profile.years.insert(book.year);
            profile.top_books.push(book);
        }
        profile
    }

    /// Assemble a profile from pre-computed parts.
    ///
    /// Keywords are deduplicated preserving first-occurrence order, and
    /// authors are lowercased, matching what [`TasteProfile::build`]
    /// produces.
    pub fn from_parts<K, A, Y, R>(keywords: K, authors: A, years: Y, rated: R) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        A: IntoIterator,
        A::Item: AsRef<str>,
        Y: IntoIterator<Item = i32>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let mut profile = Self {
            authors: authors
                .into_iter()
                .map(|author| author.as_ref().to_lowercase())
                .collect(),
            years: years.into_iter().collect(),
            rated: rated.into_iter().map(Into::into).collect(),
            ..Self::default()
        };
        for keyword in keywords {
            profile.push_keyword(keyword.into());
        }
        profile
    }

    fn push_keyword(&mut self, keyword: String) {
        if !self.keywords.contains(&keyword) {
            self.keywords.push(keyword);
        }
    }

    /// Combined keywords in first-occurrence order, deduplicated across
    /// titles.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Report whether `author_lower` is one of the profile's authors.
    /// Callers lowercase first.
    #[must_use]
    pub fn has_author(&self, author_lower: &str) -> bool {
        self.authors.contains(author_lower)
    }

    /// Publication years of the top-rated books.
    #[must_use]
    pub fn years(&self) -> &HashSet<i32> {
        &self.years
    }

    /// Report whether the user already rated `isbn`; such books are excluded
    /// from candidate scoring.
    #[must_use]
    pub fn excludes(&self, isbn: &str) -> bool {
        self.rated.contains(isbn)
    }

    /// The resolved top-rated books backing this profile.
    #[must_use]
    pub fn top_books(&self) -> &[Book] {
        &self.top_books
    }

    /// Report whether the profile carries no signal at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.authors.is_empty() && self.years.is_empty()
    }
}
