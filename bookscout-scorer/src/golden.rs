//! Golden-standard reconciliation of the two shortlists.
#![forbid(unsafe_code)]

use std::collections::HashSet;

use crate::ScoredCandidate;

/// One entry of the consensus ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldenEntry {
    /// Catalog key of the book.
    pub isbn: String,
    /// Title text.
    pub title: String,
    /// Author as published.
    pub author: String,
    /// Year of publication.
    pub year: i32,
    /// `2` when the book appears in both shortlists, `1` otherwise.
    pub occurrences: u8,
    /// Mean of both measure scores for double occurrences, the single
    /// measure's score otherwise.
    pub score: f32,
}

impl GoldenEntry {
    fn from_candidate(candidate: &ScoredCandidate, occurrences: u8, score: f32) -> Self {
        Self {
            isbn: candidate.isbn.clone(),
            title: candidate.title.clone(),
            author: candidate.author.clone(),
            year: candidate.year,
            occurrences,
            score,
        }
    }
}

/// Merge the two shortlists into one consensus ranking.
///
/// Every Jaccard entry is paired by ISBN against the Dice list: a match
/// contributes one entry with two occurrences and the arithmetic mean of
/// both scores, a miss contributes the Jaccard entry as-is. Dice entries
/// absent from the Jaccard list follow with a single occurrence. The
/// combined list is ordered by occurrences descending, then score
/// descending, and clamped to `min(limit, combined length)`; heavy overlap
/// between the inputs legitimately yields fewer than `limit` distinct
/// books.
///
/// # Examples
/// ```
/// use bookscout_scorer::{ScoredCandidate, reconcile};
///
/// let entry = |isbn: &str, score: f32| ScoredCandidate {
///     isbn: isbn.into(),
///     title: String::new(),
///     author: String::new(),
///     year: 2000,
///     score,
/// };
/// let golden = reconcile(&[entry("a", 0.8)], &[entry("a", 0.6)], 10);
/// assert_eq!(golden.len(), 1);
/// assert_eq!(golden[0].occurrences, 2);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "consensus scores average the two measures"
)]
pub fn reconcile(
    top_jaccard: &[ScoredCandidate],
    top_dice: &[ScoredCandidate],
    limit: usize,
) -> Vec<GoldenEntry> {
    let mut combined: Vec<GoldenEntry> = Vec::with_capacity(top_jaccard.len() + top_dice.len());
    let mut checked: HashSet<&str> = HashSet::with_capacity(top_jaccard.len());

    for entry in top_jaccard {
        let paired = top_dice.iter().find(|dice| dice.isbn == entry.isbn);
        combined.push(paired.map_or_else(
            || GoldenEntry::from_candidate(entry, 1, entry.score),
            |dice| GoldenEntry::from_candidate(entry, 2, (entry.score + dice.score) / 2.0_f32),
        ));
        checked.insert(entry.isbn.as_str());
    }

    for entry in top_dice {
        if checked.contains(entry.isbn.as_str()) {
            continue;
        }
        combined.push(GoldenEntry::from_candidate(entry, 1, entry.score));
    }

    combined.sort_by(|a, b| {
        b.occurrences
            .cmp(&a.occurrences)
            .then_with(|| b.score.total_cmp(&a.score))
    });
    combined.truncate(limit);
    combined
}
