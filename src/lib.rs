//! Facade crate for the Bookscout recommendation engine.
//!
//! This crate re-exports the core domain types together with the scoring
//! pipeline so applications can depend on a single crate.

#![forbid(unsafe_code)]

pub use bookscout_core::{
    Book, BookError, Catalog, Rating, RatingsTable, StopWords, TasteProfile, extract_keywords,
};

pub use bookscout_scorer::{
    GoldenEntry, RankedShortlists, ScoreError, ScoredCandidate, SessionConfig, SimilarityScores,
    SimilarityWeights, UserReport, dice_index, jaccard_index, positional_agreement, rank_catalog,
    reconcile, run_session, score_candidate,
};
