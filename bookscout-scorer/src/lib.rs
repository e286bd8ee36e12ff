//! Scoring pipeline for Bookscout candidate books.
//!
//! The crate provides the algorithmic half of the recommender:
//! - **Dual similarity scoring** compares a [`TasteProfile`] against one
//!   candidate under a Jaccard-weighted and a Dice-weighted measure, each
//!   summing a keyword term, a flat author bonus, and a year-proximity
//!   term.
//! - **Ranking** scores an entire candidate catalog, excludes books the
//!   user already rated, and keeps the top-K per measure.
//! - **Golden-standard reconciliation** merges the two shortlists into a
//!   consensus ranking by cross-list occurrence and averaged score.
//! - **Sessions** orchestrate the above per user and compute positional
//!   agreement statistics between the three rankings.
//!
//! # Examples
//!
//! ```
//! use bookscout_core::{Book, Catalog, Rating, RatingsTable, StopWords};
//! use bookscout_scorer::{SessionConfig, run_session};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::from_books(vec![
//!     Book::new("1", "The Winter King", "Bernard Cornwell", 1996)?,
//! ]);
//! let candidates = Catalog::from_books(vec![
//!     Book::new("2", "Winter's Heart", "Robert Jordan", 2000)?,
//! ]);
//! let ratings = RatingsTable::from_rows(vec![Rating::new(42, "1", 9)]);
//!
//! let config = SessionConfig { shortlist_len: 1, ..SessionConfig::default() };
//! let report = run_session(42, &catalog, &candidates, &ratings, &StopWords::english(), &config)?;
//! assert_eq!(report.by_jaccard.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod golden;
mod rank;
mod session;
mod similarity;

pub use error::ScoreError;
pub use golden::{GoldenEntry, reconcile};
pub use rank::{RankedShortlists, ScoredCandidate, rank_catalog};
pub use session::{
    DEFAULT_SHORTLIST_LEN, SessionConfig, UserReport, positional_agreement, run_session,
};
pub use similarity::{
    SimilarityScores, SimilarityWeights, dice_index, jaccard_index, score_candidate,
};

#[cfg(test)]
mod tests;
