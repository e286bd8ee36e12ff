//! Per-user recommendation sessions and agreement statistics.
//!
//! A session is self-contained: it borrows the shared read-only tables,
//! derives the profile, ranks the candidate catalog, reconciles the
//! shortlists, and returns everything the persistence layer needs in one
//! [`UserReport`]. Nothing is shared between sessions, so callers may run
//! them in any order (or concurrently) without coordination.

#![forbid(unsafe_code)]

use bookscout_core::{
    Book, Catalog, DEFAULT_TOP_RATED, RatingsTable, StopWords, TasteProfile,
};
use log::{debug, info};

use crate::{
    GoldenEntry, RankedShortlists, ScoreError, ScoredCandidate, SimilarityWeights, rank_catalog,
    reconcile,
};

/// Shortlist width used for both measures and the golden list.
pub const DEFAULT_SHORTLIST_LEN: usize = 10;

/// Tunable parameters for one recommendation session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SessionConfig {
    /// How many top-rated books seed the profile.
    pub top_rated: usize,
    /// Shortlist width per measure.
    pub shortlist_len: usize,
    /// Similarity weights, validated at session start.
    pub weights: SimilarityWeights,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            top_rated: DEFAULT_TOP_RATED,
            shortlist_len: DEFAULT_SHORTLIST_LEN,
            weights: SimilarityWeights::default(),
        }
    }
}

/// Everything one session produces for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserReport {
    /// The sampled user.
    pub user_id: u64,
    /// The resolved top-rated books the profile was built from.
    pub top_books: Vec<Book>,
    /// Top candidates by the Jaccard-weighted score.
    pub by_jaccard: Vec<ScoredCandidate>,
    /// Top candidates by the Dice-weighted score.
    pub by_dice: Vec<ScoredCandidate>,
    /// Fraction of shortlist positions where both measures agree on the
    /// ISBN.
    pub list_similarity: f32,
    /// The consensus ranking.
    pub golden: Vec<GoldenEntry>,
    /// Positional agreement between the golden list and the Jaccard
    /// shortlist.
    pub golden_jaccard: f32,
    /// Positional agreement between the golden list and the Dice
    /// shortlist.
    pub golden_dice: f32,
}

/// Run one complete recommendation session for `user_id`.
///
/// `catalog` is the full book table used to resolve rated books;
/// `candidates` is the scoring universe. The profile is derived from the
/// user's top-rated books, every eligible candidate is scored under both
/// measures, the shortlists are reconciled into the golden list, and the
/// three agreement statistics are computed.
///
/// # Errors
/// Returns [`ScoreError::InvalidWeights`] for unusable weights and
/// [`ScoreError::InsufficientCandidates`] when the candidate catalog cannot
/// fill the shortlists. Both are scoped to this user's session.
pub fn run_session(
    user_id: u64,
    catalog: &Catalog,
    candidates: &Catalog,
    ratings: &RatingsTable,
    stop_words: &StopWords,
    config: &SessionConfig,
) -> Result<UserReport, ScoreError> {
    let weights = config.weights.validate()?;
    let profile = TasteProfile::build(user_id, ratings, catalog, config.top_rated, stop_words);
    if profile.is_empty() {
        info!("user {user_id} has no resolvable ratings; scoring an empty profile");
    }
    debug!(
        "user {user_id}: {} keywords, {} profile books",
        profile.keywords().len(),
        profile.top_books().len()
    );

    let RankedShortlists { by_jaccard, by_dice } =
        rank_catalog(&profile, candidates, weights, config.shortlist_len, stop_words)?;
    let golden = reconcile(&by_jaccard, &by_dice, config.shortlist_len);

    let jaccard_isbns: Vec<&str> = by_jaccard.iter().map(|c| c.isbn.as_str()).collect();
    let dice_isbns: Vec<&str> = by_dice.iter().map(|c| c.isbn.as_str()).collect();
    let golden_isbns: Vec<&str> = golden.iter().map(|g| g.isbn.as_str()).collect();
    let list_similarity = positional_agreement(&jaccard_isbns, &dice_isbns, config.shortlist_len);
    let golden_jaccard = positional_agreement(&golden_isbns, &jaccard_isbns, config.shortlist_len);
    let golden_dice = positional_agreement(&golden_isbns, &dice_isbns, config.shortlist_len);

    Ok(UserReport {
        user_id,
        top_books: profile.top_books().to_vec(),
        list_similarity,
        golden_jaccard,
        golden_dice,
        by_jaccard,
        by_dice,
        golden,
    })
}

/// Fraction of the first `width` positions where both lists carry the same
/// identifier.
///
/// A list shorter than `width` simply contributes no matches beyond its
/// length; the denominator stays `width` so the statistic is comparable
/// across users.
///
/// # Examples
/// ```
/// use bookscout_scorer::positional_agreement;
///
/// let a = ["1", "2", "3", "4"];
/// let b = ["1", "9", "3", "8"];
/// assert!((positional_agreement(&a, &b, 4) - 0.5).abs() < 1e-6);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the statistic is a ratio of position counts"
)]
pub fn positional_agreement<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B], width: usize) -> f32 {
    if width == 0 {
        return 0.0;
    }
    let matches = a
        .iter()
        .zip(b.iter())
        .take(width)
        .filter(|(left, right)| left.as_ref() == right.as_ref())
        .count();
    matches as f32 / width as f32
}
