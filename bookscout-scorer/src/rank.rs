//! Full-catalog scoring and per-measure shortlists.
#![forbid(unsafe_code)]

use bookscout_core::{Book, Catalog, StopWords, TasteProfile, extract_keywords};

use crate::{ScoreError, SimilarityWeights, score_candidate};

/// One candidate book with its score under a single measure.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// Catalog key of the candidate.
    pub isbn: String,
    /// Title text.
    pub title: String,
    /// Author as published (not lowercased).
    pub author: String,
    /// Year of publication.
    pub year: i32,
    /// Weighted similarity score under the list's measure.
    pub score: f32,
}

impl ScoredCandidate {
    fn scored(book: &Book, score: f32) -> Self {
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year,
            score,
        }
    }
}

/// The two parallel shortlists produced by one ranking pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankedShortlists {
    /// Top candidates by the Jaccard-weighted score, descending.
    pub by_jaccard: Vec<ScoredCandidate>,
    /// Top candidates by the Dice-weighted score, descending.
    pub by_dice: Vec<ScoredCandidate>,
}

/// Score every eligible candidate and keep the top `top_k` per measure.
///
/// Books the user has already rated are skipped. Each list is sorted by its
/// score descending with a stable sort, so tied scores keep the catalog's
/// traversal order; no secondary key is applied on purpose (the tie order
/// is reproducible but otherwise unspecified).
///
/// # Errors
/// Returns [`ScoreError::InsufficientCandidates`] when fewer than `top_k`
/// candidates remain after exclusion; the fixed-width outputs downstream
/// assume full shortlists.
pub fn rank_catalog(
    profile: &TasteProfile,
    candidates: &Catalog,
    weights: SimilarityWeights,
    top_k: usize,
    stop_words: &StopWords,
) -> Result<RankedShortlists, ScoreError> {
    let mut by_jaccard: Vec<ScoredCandidate> = Vec::new();
    let mut by_dice: Vec<ScoredCandidate> = Vec::new();

    for book in candidates.iter() {
        if profile.excludes(&book.isbn) {
            continue;
        }
        let keywords = extract_keywords(&book.title, stop_words);
        let scores = score_candidate(
            profile,
            &keywords,
            &book.author.to_lowercase(),
            book.year,
            weights,
        );
        by_jaccard.push(ScoredCandidate::scored(book, scores.jaccard));
        by_dice.push(ScoredCandidate::scored(book, scores.dice));
    }

    if by_jaccard.len() < top_k {
        return Err(ScoreError::InsufficientCandidates {
            available: by_jaccard.len(),
            required: top_k,
        });
    }

    sort_by_score_descending(&mut by_jaccard);
    sort_by_score_descending(&mut by_dice);
    by_jaccard.truncate(top_k);
    by_dice.truncate(top_k);

    Ok(RankedShortlists {
        by_jaccard,
        by_dice,
    })
}

fn sort_by_score_descending(list: &mut [ScoredCandidate]) {
    list.sort_by(|a, b| b.score.total_cmp(&a.score));
}
