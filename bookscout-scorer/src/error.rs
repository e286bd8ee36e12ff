//! Error types raised by the scoring pipeline.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised while scoring, ranking, or reconciling candidates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// Similarity weights were unusable.
    #[error("similarity weights must be finite and non-negative with a positive year span")]
    InvalidWeights,
    /// The candidate catalog cannot fill a shortlist of the requested width.
    ///
    /// Fatal for the session: the fixed-width outputs downstream assume
    /// exactly `required` rows.
    #[error("only {available} eligible candidates remain after exclusion; {required} are required")]
    InsufficientCandidates {
        /// Candidates left after excluding already-rated books.
        available: usize,
        /// Requested shortlist width.
        required: usize,
    },
}
