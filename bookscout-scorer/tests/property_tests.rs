//! Property-based tests for the scoring pipeline.
//!
//! These tests use `proptest` to assert invariants that must hold for all
//! valid inputs, complementing the unit tests and the BDD behavioural
//! coverage.
//!
//! # Invariants tested
//!
//! - **Index identities:** self-similarity is 1.0, both indices are
//!   symmetric and bounded by `0.0..=1.0`.
//! - **Exclusion:** ranking never emits a book the user already rated.
//! - **Reconciliation:** the golden list is exactly the distinct union
//!   clamped to the limit, occurrence counts reflect membership, and the
//!   ordering invariant holds.

#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]
#![expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating point values"
)]

use std::collections::HashSet;

use bookscout_core::{Book, Catalog, StopWords, TasteProfile};
use proptest::prelude::*;

use bookscout_scorer::{
    ScoredCandidate, SimilarityWeights, dice_index, jaccard_index, rank_catalog, reconcile,
};

const GOLDEN_LIMIT: usize = 10;

/// A small set of distinct lowercase tokens.
fn token_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{2,8}", 1..8)
        .prop_map(|set| set.into_iter().collect::<Vec<String>>())
}

/// Scored candidates with distinct ISBNs and bounded scores.
fn candidate_list() -> impl Strategy<Value = Vec<ScoredCandidate>> {
    prop::collection::btree_map(0_u32..40, 0.0_f32..1.0_f32, 0..15).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(id, score)| ScoredCandidate {
                isbn: format!("b{id}"),
                title: format!("Book {id}"),
                author: "Author".to_owned(),
                year: 2000,
                score,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: a non-empty set compared with itself scores 1.0 under both
    /// indices.
    #[test]
    fn self_similarity_is_one(tokens in token_set()) {
        prop_assert!((jaccard_index(&tokens, &tokens) - 1.0).abs() < 1e-6);
        prop_assert!((dice_index(&tokens, &tokens) - 1.0).abs() < 1e-6);
    }

    /// Property: both indices are symmetric in their arguments.
    #[test]
    fn indices_are_symmetric(a in token_set(), b in token_set()) {
        prop_assert_eq!(jaccard_index(&a, &b), jaccard_index(&b, &a));
        prop_assert_eq!(dice_index(&a, &b), dice_index(&b, &a));
    }

    /// Property: both indices stay within `0.0..=1.0`.
    #[test]
    fn indices_are_bounded(a in token_set(), b in token_set()) {
        let jaccard = jaccard_index(&a, &b);
        let dice = dice_index(&a, &b);
        prop_assert!((0.0..=1.0).contains(&jaccard));
        prop_assert!((0.0..=1.0).contains(&dice));
    }

    /// Property: a shortlist never contains an excluded (already rated)
    /// ISBN, regardless of how many books are excluded.
    #[test]
    fn ranking_respects_exclusions(excluded_count in 0_usize..5) {
        let books: Vec<Book> = (0..20)
            .map(|i| {
                Book::new(format!("b{i}"), format!("Sea Story {i}"), "Author", 1990 + i)
                    .expect("valid book")
            })
            .collect();
        let rated: Vec<String> = books
            .iter()
            .take(excluded_count)
            .map(|b| b.isbn.clone())
            .collect();
        let profile = TasteProfile::from_parts(
            ["sea", "story"],
            ["author"],
            [2000],
            rated.clone(),
        );
        let catalog = Catalog::from_books(books);

        let lists = rank_catalog(
            &profile,
            &catalog,
            SimilarityWeights::default(),
            10,
            &StopWords::english(),
        )
        .expect("catalog is large enough");

        for isbn in &rated {
            prop_assert!(lists.by_jaccard.iter().all(|c| &c.isbn != isbn));
            prop_assert!(lists.by_dice.iter().all(|c| &c.isbn != isbn));
        }
    }

    /// Property: the golden list is the distinct union of both inputs,
    /// clamped to the limit, with occurrence counts matching membership.
    #[test]
    fn reconciliation_counts_membership(
        top_jaccard in candidate_list(),
        top_dice in candidate_list(),
    ) {
        let golden = reconcile(&top_jaccard, &top_dice, GOLDEN_LIMIT);

        let jaccard_isbns: HashSet<&str> =
            top_jaccard.iter().map(|c| c.isbn.as_str()).collect();
        let dice_isbns: HashSet<&str> = top_dice.iter().map(|c| c.isbn.as_str()).collect();
        let distinct = jaccard_isbns.union(&dice_isbns).count();

        prop_assert_eq!(golden.len(), distinct.min(GOLDEN_LIMIT));

        for entry in &golden {
            let in_jaccard = jaccard_isbns.contains(entry.isbn.as_str());
            let in_dice = dice_isbns.contains(entry.isbn.as_str());
            let expected = if in_jaccard && in_dice { 2 } else { 1 };
            prop_assert_eq!(entry.occurrences, expected);
            prop_assert!(in_jaccard || in_dice);
        }
    }

    /// Property: golden ordering is occurrences descending, then score
    /// descending.
    #[test]
    fn reconciliation_orders_by_occurrence_then_score(
        top_jaccard in candidate_list(),
        top_dice in candidate_list(),
    ) {
        let golden = reconcile(&top_jaccard, &top_dice, GOLDEN_LIMIT);

        for window in golden.windows(2) {
            let first = window.first().expect("window of two");
            let second = window.get(1).expect("window of two");
            prop_assert!(
                first.occurrences > second.occurrences
                    || (first.occurrences == second.occurrences
                        && first.score >= second.score)
            );
        }
    }
}
