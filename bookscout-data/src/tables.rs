//! Loading of the delimited input tables.
//!
//! The four tables (full catalog, candidate catalog, users, ratings) are
//! `;`-delimited CSV with headers, read once at startup. Cells that fail to
//! parse (the BX dumps contain years like "DK Publishing Inc") are logged
//! and skipped; a missing file or structurally broken record is fatal.

use camino::{Utf8Path, Utf8PathBuf};
use csv::ReaderBuilder;
use log::warn;
use serde::Deserialize;
use thiserror::Error;

use bookscout_core::{Book, Catalog, Rating, RatingsTable};

/// Field separator used by all input tables.
const TABLE_DELIMITER: u8 = b';';

/// Errors raised while loading an input table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Opening or reading the table header failed.
    #[error("failed to open table at {path}")]
    Open {
        /// Requested table path.
        path: Utf8PathBuf,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// A record could not be decoded against the table's header.
    #[error("failed to decode a record from {path}")]
    Decode {
        /// Requested table path.
        path: Utf8PathBuf,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
}

/// All input tables for one run, loaded once and then read-only.
#[derive(Debug, Clone)]
pub struct SessionTables {
    /// Full catalog used to resolve rated books.
    pub catalog: Catalog,
    /// Filtered catalog used as the scoring universe.
    pub candidates: Catalog,
    /// Known user identifiers, in table order.
    pub users: Vec<u64>,
    /// All rating rows, in table order.
    pub ratings: RatingsTable,
}

/// Load the four input tables.
///
/// # Errors
/// Returns [`TableError`] when any table cannot be opened or decoded.
pub fn load_tables(
    books: &Utf8Path,
    candidates: &Utf8Path,
    users: &Utf8Path,
    ratings: &Utf8Path,
) -> Result<SessionTables, TableError> {
    Ok(SessionTables {
        catalog: load_catalog(books)?,
        candidates: load_catalog(candidates)?,
        users: load_users(users)?,
        ratings: load_ratings(ratings)?,
    })
}

#[derive(Debug, Deserialize)]
struct BookRow {
    #[serde(rename = "ISBN")]
    isbn: String,
    #[serde(rename = "Book-Title")]
    title: String,
    #[serde(rename = "Book-Author")]
    author: String,
    #[serde(rename = "Year-Of-Publication")]
    year: String,
}

/// Load a book table into a [`Catalog`], preserving row order.
///
/// Rows with unparseable years or empty keys are logged and dropped.
///
/// # Errors
/// Returns [`TableError`] when the file cannot be opened or a record cannot
/// be decoded.
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, TableError> {
    let mut reader = open_table(path)?;
    let mut books = Vec::new();
    for record in reader.deserialize::<BookRow>() {
        let row = record.map_err(|source| TableError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let Ok(year) = row.year.trim().parse::<i32>() else {
            warn!(
                "skipping catalog row {}: unparseable year {:?}",
                row.isbn, row.year
            );
            continue;
        };
        match Book::new(row.isbn, row.title, row.author, year) {
            Ok(book) => books.push(book),
            Err(err) => warn!("skipping catalog row: {err}"),
        }
    }
    Ok(Catalog::from_books(books))
}

#[derive(Debug, Deserialize)]
struct UserRow {
    #[serde(rename = "User-ID")]
    id: String,
}

/// Load the user table, preserving row order.
///
/// # Errors
/// Returns [`TableError`] when the file cannot be opened or a record cannot
/// be decoded.
pub fn load_users(path: &Utf8Path) -> Result<Vec<u64>, TableError> {
    let mut reader = open_table(path)?;
    let mut users = Vec::new();
    for record in reader.deserialize::<UserRow>() {
        let row = record.map_err(|source| TableError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        match row.id.trim().parse::<u64>() {
            Ok(id) => users.push(id),
            Err(_) => warn!("skipping user row: unparseable User-ID {:?}", row.id),
        }
    }
    Ok(users)
}

#[derive(Debug, Deserialize)]
struct RatingRow {
    #[serde(rename = "User-ID")]
    user_id: String,
    #[serde(rename = "ISBN")]
    isbn: String,
    #[serde(rename = "Book-Rating")]
    score: String,
}

/// Load the ratings table, preserving row order.
///
/// # Errors
/// Returns [`TableError`] when the file cannot be opened or a record cannot
/// be decoded.
pub fn load_ratings(path: &Utf8Path) -> Result<RatingsTable, TableError> {
    let mut reader = open_table(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize::<RatingRow>() {
        let row = record.map_err(|source| TableError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let (Ok(user_id), Ok(score)) = (
            row.user_id.trim().parse::<u64>(),
            row.score.trim().parse::<u8>(),
        ) else {
            warn!(
                "skipping rating row for ISBN {}: unparseable User-ID {:?} or Book-Rating {:?}",
                row.isbn, row.user_id, row.score
            );
            continue;
        };
        rows.push(Rating::new(user_id, row.isbn, score));
    }
    Ok(RatingsTable::from_rows(rows))
}

fn open_table(path: &Utf8Path) -> Result<csv::Reader<std::fs::File>, TableError> {
    ReaderBuilder::new()
        .delimiter(TABLE_DELIMITER)
        .from_path(path.as_std_path())
        .map_err(|source| TableError::Open {
            path: path.to_path_buf(),
            source,
        })
}
