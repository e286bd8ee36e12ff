//! Core domain types for the Bookscout engine.
//!
//! The crate holds the immutable input tables ([`Catalog`],
//! [`RatingsTable`]), the keyword-extraction capability, and the
//! [`TasteProfile`] derived from a user's top-rated books. Scoring lives in
//! `bookscout-scorer`; loading and persistence live in `bookscout-data`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod book;
mod keywords;
mod profile;
mod store;

pub use book::{Book, BookError, Rating};
pub use keywords::{StopWords, extract_keywords};
pub use profile::{DEFAULT_TOP_RATED, TasteProfile};
pub use store::{Catalog, RatingsTable};
