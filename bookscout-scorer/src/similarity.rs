//! Weighted similarity between a taste profile and one candidate book.
//!
//! Two parallel measures are maintained throughout the pipeline: a
//! Jaccard-weighted score and a Dice-weighted score. Both combine a keyword
//! set-similarity term, a flat author bonus, and a publication-year
//! proximity term; the weights differ per measure so the two shortlists
//! disagree in interesting ways.

#![forbid(unsafe_code)]

use std::collections::HashSet;

use bookscout_core::TasteProfile;

use crate::ScoreError;

/// Jaccard index of two token sequences treated as sets:
/// `|A ∩ B| / |A ∪ B|`.
///
/// When both sequences are empty the union is empty and the quotient is
/// undefined; the result is defined as `0.0` rather than propagating an
/// arithmetic fault (the degenerate-profile policy).
///
/// # Examples
/// ```
/// use bookscout_scorer::jaccard_index;
///
/// let sim = jaccard_index(&["the", "cat", "sat"], &["the", "dog", "sat"]);
/// assert!((sim - 0.5).abs() < 1e-6);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "set similarity is a ratio of small set cardinalities"
)]
pub fn jaccard_index<S: AsRef<str>, T: AsRef<str>>(a: &[S], b: &[T]) -> f32 {
    let first: HashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let second: HashSet<&str> = b.iter().map(AsRef::as_ref).collect();
    let union = first.union(&second).count();
    if union == 0 {
        return 0.0;
    }
    first.intersection(&second).count() as f32 / union as f32
}

/// Dice coefficient of two token sequences treated as sets:
/// `2|A ∩ B| / (|A| + |B|)`.
///
/// Defined as `0.0` when both sets are empty, mirroring [`jaccard_index`].
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "set similarity is a ratio of small set cardinalities"
)]
pub fn dice_index<S: AsRef<str>, T: AsRef<str>>(a: &[S], b: &[T]) -> f32 {
    let first: HashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let second: HashSet<&str> = b.iter().map(AsRef::as_ref).collect();
    let total = first.len() + second.len();
    if total == 0 {
        return 0.0;
    }
    (2 * first.intersection(&second).count()) as f32 / total as f32
}

/// Weights applied to the similarity terms of both measures.
///
/// The default weights sum to at most 1.0 per measure. Scores are raw
/// weighted sums with no normalisation, so the year term may go negative
/// for very distant years.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SimilarityWeights {
    /// Keyword-term multiplier on the Jaccard measure.
    pub keyword_jaccard: f32,
    /// Keyword-term multiplier on the Dice measure.
    pub keyword_dice: f32,
    /// Flat bonus on the Jaccard measure when the author matches.
    pub author_jaccard: f32,
    /// Flat bonus on the Dice measure when the author matches.
    pub author_dice: f32,
    /// Year-term multiplier on the Jaccard measure.
    pub year_jaccard: f32,
    /// Year-term multiplier on the Dice measure.
    pub year_dice: f32,
    /// Divisor for year distance; proximity decays linearly over this span.
    pub year_span: f32,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            keyword_jaccard: 0.2_f32,
            keyword_dice: 0.5_f32,
            author_jaccard: 0.4_f32,
            author_dice: 0.3_f32,
            year_jaccard: 0.4_f32,
            year_dice: 0.2_f32,
            year_span: 2005.0_f32,
        }
    }
}

impl SimilarityWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidWeights`] when any weight is non-finite
    /// or negative, or when the year span is not strictly positive.
    pub const fn validate(self) -> Result<Self, ScoreError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ScoreError::InvalidWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.year_span > 0.0_f32
    }

    const fn has_finite_values(self) -> bool {
        self.keyword_jaccard.is_finite()
            && self.keyword_dice.is_finite()
            && self.author_jaccard.is_finite()
            && self.author_dice.is_finite()
            && self.year_jaccard.is_finite()
            && self.year_dice.is_finite()
            && self.year_span.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.keyword_jaccard >= 0.0_f32
            && self.keyword_dice >= 0.0_f32
            && self.author_jaccard >= 0.0_f32
            && self.author_dice >= 0.0_f32
            && self.year_jaccard >= 0.0_f32
            && self.year_dice >= 0.0_f32
    }
}

/// One candidate's score under both measures.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SimilarityScores {
    /// Jaccard-weighted score.
    pub jaccard: f32,
    /// Dice-weighted score.
    pub dice: f32,
}

/// Score one candidate book against a profile.
///
/// `author_lower` must already be lowercased; the author bonus is binary,
/// not proportional. The year term takes the best (maximum) proximity
/// multiplier across the profile's years and is `0.0` when the profile has
/// no years at all.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "candidate scoring sums weighted similarity terms"
)]
pub fn score_candidate(
    profile: &TasteProfile,
    candidate_keywords: &[String],
    author_lower: &str,
    year: i32,
    weights: SimilarityWeights,
) -> SimilarityScores {
    let mut jaccard =
        weights.keyword_jaccard * jaccard_index(candidate_keywords, profile.keywords());
    let mut dice = weights.keyword_dice * dice_index(candidate_keywords, profile.keywords());

    if profile.has_author(author_lower) {
        jaccard += weights.author_jaccard;
        dice += weights.author_dice;
    }

    let multiplier = best_year_multiplier(profile.years(), year, weights.year_span);
    jaccard += weights.year_jaccard * multiplier;
    dice += weights.year_dice * multiplier;

    SimilarityScores { jaccard, dice }
}

/// Best proximity multiplier across the profile years, `0.0` for an empty
/// set. Not clamped: a lone far-away year yields a negative multiplier.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "year proximity decays linearly with the absolute distance"
)]
fn best_year_multiplier(years: &HashSet<i32>, candidate_year: i32, span: f32) -> f32 {
    years
        .iter()
        .map(|&year| 1.0_f32 - (year - candidate_year).abs() as f32 / span)
        .reduce(f32::max)
        .unwrap_or(0.0_f32)
}
