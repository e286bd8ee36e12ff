//! Unit coverage for similarity, ranking, and reconciliation.
#![forbid(unsafe_code)]
#![expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]

use bookscout_core::{Book, Catalog, Rating, RatingsTable, StopWords, TasteProfile};
use rstest::{fixture, rstest};

use crate::{
    ScoreError, ScoredCandidate, SessionConfig, SimilarityWeights, dice_index, jaccard_index,
    positional_agreement, rank_catalog, reconcile, run_session, score_candidate,
};

const TOLERANCE: f32 = 0.000_1_f32;

fn assert_near(value: f32, expected: f32, message: &str) {
    assert!(
        (value - expected).abs() < TOLERANCE,
        "{message}: expected {expected}, got {value}"
    );
}

fn candidate(isbn: &str, score: f32) -> ScoredCandidate {
    ScoredCandidate {
        isbn: isbn.to_owned(),
        title: format!("Title {isbn}"),
        author: "Author".to_owned(),
        year: 2000,
        score,
    }
}

#[fixture]
fn profile() -> TasteProfile {
    TasteProfile::from_parts(
        ["alpha", "beta", "gamma"],
        ["smith"],
        [2000],
        ["rated-1", "rated-2"],
    )
}

mod indices {
    use super::*;

    #[rstest]
    #[case(&["sea", "storm"])]
    #[case(&["one"])]
    fn identical_sets_score_one(#[case] tokens: &[&str]) {
        assert_near(jaccard_index(tokens, tokens), 1.0, "jaccard self-similarity");
        assert_near(dice_index(tokens, tokens), 1.0, "dice self-similarity");
    }

    #[rstest]
    fn indices_are_symmetric() {
        let a = ["sea", "storm", "island"];
        let b = ["storm", "harbour"];
        assert_near(jaccard_index(&a, &b), jaccard_index(&b, &a), "jaccard symmetry");
        assert_near(dice_index(&a, &b), dice_index(&b, &a), "dice symmetry");
    }

    #[rstest]
    fn disjoint_sets_score_zero() {
        let a = ["sea"];
        let b = ["mountain"];
        assert_near(jaccard_index(&a, &b), 0.0, "jaccard disjoint");
        assert_near(dice_index(&a, &b), 0.0, "dice disjoint");
    }

    #[rstest]
    fn both_empty_sets_score_zero() {
        let empty: [&str; 0] = [];
        assert_near(jaccard_index(&empty, &empty), 0.0, "jaccard empty/empty");
        assert_near(dice_index(&empty, &empty), 0.0, "dice empty/empty");
    }

    #[rstest]
    fn duplicate_tokens_collapse_into_sets() {
        let a = ["sea", "sea", "storm"];
        let b = ["sea", "storm"];
        assert_near(jaccard_index(&a, &b), 1.0, "duplicates ignored");
    }

    #[rstest]
    fn known_overlap_has_exact_ratio() {
        let a = ["the", "cat", "sat"];
        let b = ["the", "dog", "sat"];
        // 2 shared, 4 distinct.
        assert_near(jaccard_index(&a, &b), 0.5, "jaccard 2/4");
        assert_near(dice_index(&a, &b), 2.0 / 3.0, "dice 4/6");
    }
}

mod weights {
    use super::*;

    #[rstest]
    fn default_weights_validate() {
        assert!(SimilarityWeights::default().validate().is_ok());
    }

    #[rstest]
    fn negative_weight_is_rejected() {
        let weights = SimilarityWeights {
            author_jaccard: -0.1,
            ..SimilarityWeights::default()
        };
        assert_eq!(weights.validate(), Err(ScoreError::InvalidWeights));
    }

    #[rstest]
    fn non_finite_weight_is_rejected() {
        let weights = SimilarityWeights {
            keyword_dice: f32::NAN,
            ..SimilarityWeights::default()
        };
        assert_eq!(weights.validate(), Err(ScoreError::InvalidWeights));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-2005.0)]
    fn non_positive_year_span_is_rejected(#[case] span: f32) {
        let weights = SimilarityWeights {
            year_span: span,
            ..SimilarityWeights::default()
        };
        assert_eq!(weights.validate(), Err(ScoreError::InvalidWeights));
    }
}

mod scoring {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_owned()).collect()
    }

    #[rstest]
    fn full_match_sums_every_term(profile: TasteProfile) {
        let scores = score_candidate(
            &profile,
            &keywords(&["alpha", "beta", "gamma"]),
            "smith",
            2000,
            SimilarityWeights::default(),
        );
        // 0.2 + 0.4 + 0.4 and 0.5 + 0.3 + 0.2.
        assert_near(scores.jaccard, 1.0, "jaccard full match");
        assert_near(scores.dice, 1.0, "dice full match");
    }

    #[rstest]
    fn partial_keyword_overlap_scales_the_keyword_term(profile: TasteProfile) {
        let scores = score_candidate(
            &profile,
            &keywords(&["beta", "gamma"]),
            "smith",
            2000,
            SimilarityWeights::default(),
        );
        assert_near(scores.jaccard, 0.2 * (2.0 / 3.0) + 0.4 + 0.4, "jaccard partial");
        assert_near(scores.dice, 0.5 * (4.0 / 5.0) + 0.3 + 0.2, "dice partial");
    }

    #[rstest]
    fn author_bonus_is_binary(profile: TasteProfile) {
        let matched = score_candidate(
            &profile,
            &keywords(&[]),
            "smith",
            2000,
            SimilarityWeights::default(),
        );
        let unmatched = score_candidate(
            &profile,
            &keywords(&[]),
            "jones",
            2000,
            SimilarityWeights::default(),
        );
        assert_near(matched.jaccard - unmatched.jaccard, 0.4, "jaccard author bonus");
        assert_near(matched.dice - unmatched.dice, 0.3, "dice author bonus");
    }

    #[rstest]
    fn year_distance_decays_linearly(profile: TasteProfile) {
        let scores = score_candidate(
            &profile,
            &keywords(&[]),
            "jones",
            1800,
            SimilarityWeights::default(),
        );
        let multiplier = 1.0 - 200.0 / 2005.0;
        assert_near(scores.jaccard, 0.4 * multiplier, "jaccard year decay");
        assert_near(scores.dice, 0.2 * multiplier, "dice year decay");
    }

    #[rstest]
    fn best_year_wins_across_profile_years() {
        let profile = TasteProfile::from_parts(
            Vec::<String>::new(),
            Vec::<String>::new(),
            [1960, 1999],
            Vec::<String>::new(),
        );
        let scores = score_candidate(
            &profile,
            &keywords(&[]),
            "jones",
            2000,
            SimilarityWeights::default(),
        );
        let multiplier = 1.0 - 1.0 / 2005.0;
        assert_near(scores.jaccard, 0.4 * multiplier, "closest year wins");
    }

    #[rstest]
    fn distant_year_may_push_the_term_negative() {
        let profile = TasteProfile::from_parts(
            Vec::<String>::new(),
            Vec::<String>::new(),
            [0],
            Vec::<String>::new(),
        );
        let scores = score_candidate(
            &profile,
            &keywords(&[]),
            "jones",
            2020,
            SimilarityWeights::default(),
        );
        assert!(scores.jaccard < 0.0, "year term is not clamped at zero");
    }

    #[rstest]
    fn empty_year_set_contributes_nothing() {
        let profile = TasteProfile::from_parts(
            ["alpha"],
            Vec::<String>::new(),
            std::iter::empty(),
            Vec::<String>::new(),
        );
        let scores = score_candidate(
            &profile,
            &keywords(&["alpha"]),
            "jones",
            2000,
            SimilarityWeights::default(),
        );
        assert_near(scores.jaccard, 0.2, "keyword term only");
        assert_near(scores.dice, 0.5, "keyword term only");
    }

    #[rstest]
    fn empty_profile_and_candidate_degenerate_to_zero_keyword_term() {
        let profile = TasteProfile::from_parts(
            Vec::<String>::new(),
            Vec::<String>::new(),
            std::iter::empty(),
            Vec::<String>::new(),
        );
        let scores = score_candidate(
            &profile,
            &keywords(&[]),
            "jones",
            2000,
            SimilarityWeights::default(),
        );
        assert_near(scores.jaccard, 0.0, "no arithmetic fault for empty sets");
        assert_near(scores.dice, 0.0, "no arithmetic fault for empty sets");
    }
}

mod ranking {
    use super::*;

    fn small_catalog() -> Catalog {
        Catalog::from_books(vec![
            Book::new("1", "Alpha Beta Gamma", "Smith", 2000).expect("valid"),
            Book::new("2", "Beta Gamma", "Jones", 1995).expect("valid"),
            Book::new("rated-1", "Alpha", "Smith", 2000).expect("valid"),
            Book::new("3", "Delta Epsilon", "Brown", 1950).expect("valid"),
        ])
    }

    #[rstest]
    fn rated_books_never_appear(profile: TasteProfile) {
        let lists = rank_catalog(
            &profile,
            &small_catalog(),
            SimilarityWeights::default(),
            3,
            &StopWords::english(),
        )
        .expect("enough candidates");
        assert!(lists.by_jaccard.iter().all(|c| c.isbn != "rated-1"));
        assert!(lists.by_dice.iter().all(|c| c.isbn != "rated-1"));
    }

    #[rstest]
    fn shortlists_are_sorted_descending(profile: TasteProfile) {
        let lists = rank_catalog(
            &profile,
            &small_catalog(),
            SimilarityWeights::default(),
            3,
            &StopWords::english(),
        )
        .expect("enough candidates");
        for window in lists.by_jaccard.windows(2) {
            assert!(window[0].score >= window[1].score, "jaccard order");
        }
        for window in lists.by_dice.windows(2) {
            assert!(window[0].score >= window[1].score, "dice order");
        }
    }

    #[rstest]
    fn the_full_title_match_ranks_first(profile: TasteProfile) {
        let lists = rank_catalog(
            &profile,
            &small_catalog(),
            SimilarityWeights::default(),
            3,
            &StopWords::english(),
        )
        .expect("enough candidates");
        assert_eq!(lists.by_jaccard.first().map(|c| c.isbn.as_str()), Some("1"));
        assert_eq!(lists.by_dice.first().map(|c| c.isbn.as_str()), Some("1"));
    }

    #[rstest]
    fn insufficient_candidates_are_fatal(profile: TasteProfile) {
        let result = rank_catalog(
            &profile,
            &small_catalog(),
            SimilarityWeights::default(),
            10,
            &StopWords::english(),
        );
        assert_eq!(
            result.err(),
            Some(ScoreError::InsufficientCandidates {
                available: 3,
                required: 10,
            })
        );
    }

    #[rstest]
    fn tied_scores_keep_traversal_order() {
        let profile = TasteProfile::from_parts(
            Vec::<String>::new(),
            Vec::<String>::new(),
            [2000],
            Vec::<String>::new(),
        );
        let catalog = Catalog::from_books(vec![
            Book::new("b", "Beta", "Jones", 2000).expect("valid"),
            Book::new("a", "Alpha", "Jones", 2000).expect("valid"),
        ]);
        let lists = rank_catalog(
            &profile,
            &catalog,
            SimilarityWeights::default(),
            2,
            &StopWords::english(),
        )
        .expect("enough candidates");
        let isbns: Vec<&str> = lists.by_jaccard.iter().map(|c| c.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["b", "a"]);
    }
}

mod golden {
    use super::*;

    #[rstest]
    fn shared_books_average_their_scores() {
        let golden = reconcile(&[candidate("a", 0.8)], &[candidate("a", 0.6)], 10);
        assert_eq!(golden.len(), 1);
        let entry = golden.first().expect("one entry");
        assert_eq!(entry.occurrences, 2);
        assert_near(entry.score, 0.7, "mean of both measures");
    }

    #[rstest]
    fn single_list_books_keep_their_score() {
        let golden = reconcile(&[candidate("a", 0.8)], &[candidate("b", 0.6)], 10);
        assert_eq!(golden.len(), 2);
        assert!(golden.iter().all(|entry| entry.occurrences == 1));
        let dice_only = golden.iter().find(|e| e.isbn == "b").expect("dice entry");
        assert_near(dice_only.score, 0.6, "dice score preserved");
    }

    #[rstest]
    fn double_occurrence_outranks_any_single_score() {
        let golden = reconcile(
            &[candidate("shared", 0.1), candidate("solo", 0.9)],
            &[candidate("shared", 0.2)],
            10,
        );
        let first = golden.first().expect("entries");
        assert_eq!(first.isbn, "shared");
        assert_eq!(first.occurrences, 2);
    }

    #[rstest]
    fn equal_occurrences_order_by_score() {
        let golden = reconcile(
            &[candidate("low", 0.2), candidate("high", 0.9)],
            &[],
            10,
        );
        let isbns: Vec<&str> = golden.iter().map(|e| e.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["high", "low"]);
    }

    #[rstest]
    fn output_is_clamped_to_the_distinct_count() {
        let golden = reconcile(&[candidate("a", 0.8)], &[candidate("a", 0.7)], 10);
        assert_eq!(golden.len(), 1);
    }

    #[rstest]
    fn output_is_truncated_to_the_limit() {
        let many: Vec<ScoredCandidate> = (0..15).map(|i| candidate(&format!("j{i}"), 0.5)).collect();
        let golden = reconcile(&many, &[], 10);
        assert_eq!(golden.len(), 10);
    }
}

mod sessions {
    use super::*;

    #[rstest]
    fn four_positional_matches_in_ten_is_point_four() {
        let a = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];
        let b = ["1", "2", "3", "4", "x", "y", "z", "w", "v", "u"];
        assert_near(positional_agreement(&a, &b, 10), 0.4, "list similarity");
    }

    #[rstest]
    fn short_lists_keep_the_fixed_denominator() {
        let golden = ["1", "2"];
        let shortlist = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];
        assert_near(
            positional_agreement(&golden, &shortlist, 10),
            0.2,
            "clamped golden list against a full shortlist",
        );
    }

    #[rstest]
    fn zero_width_is_defined_as_zero() {
        let list = ["1"];
        assert_near(positional_agreement(&list, &list, 0), 0.0, "empty width");
    }

    fn tables() -> (Catalog, Catalog, RatingsTable) {
        let catalog = Catalog::from_books(vec![
            Book::new("r1", "Sea Stories", "Smith", 1998).expect("valid"),
            Book::new("r2", "Storm Tales", "Jones", 2001).expect("valid"),
        ]);
        let candidates = Catalog::from_books(
            (0..12)
                .map(|i| {
                    Book::new(
                        format!("c{i}"),
                        format!("Sea Adventure {i}"),
                        "Smith",
                        1995 + i,
                    )
                    .expect("valid")
                })
                .collect(),
        );
        let ratings = RatingsTable::from_rows(vec![
            Rating::new(5, "r1", 9),
            Rating::new(5, "r2", 7),
        ]);
        (catalog, candidates, ratings)
    }

    #[rstest]
    fn sessions_produce_full_reports() {
        let (catalog, candidates, ratings) = tables();
        let report = run_session(
            5,
            &catalog,
            &candidates,
            &ratings,
            &StopWords::english(),
            &SessionConfig::default(),
        )
        .expect("session succeeds");

        assert_eq!(report.user_id, 5);
        assert_eq!(report.top_books.len(), 2);
        assert_eq!(report.by_jaccard.len(), 10);
        assert_eq!(report.by_dice.len(), 10);
        assert!(!report.golden.is_empty());
        assert!((0.0..=1.0).contains(&report.list_similarity));
    }

    #[rstest]
    fn sessions_fail_cleanly_on_small_catalogs() {
        let (catalog, _, ratings) = tables();
        let tiny = Catalog::from_books(vec![
            Book::new("only", "Sea Adventure", "Smith", 1995).expect("valid"),
        ]);
        let result = run_session(
            5,
            &catalog,
            &tiny,
            &ratings,
            &StopWords::english(),
            &SessionConfig::default(),
        );
        assert_eq!(
            result.err(),
            Some(ScoreError::InsufficientCandidates {
                available: 1,
                required: 10,
            })
        );
    }

    #[rstest]
    fn invalid_weights_are_rejected_up_front() {
        let (catalog, candidates, ratings) = tables();
        let config = SessionConfig {
            weights: SimilarityWeights {
                year_span: 0.0,
                ..SimilarityWeights::default()
            },
            ..SessionConfig::default()
        };
        let result = run_session(
            5,
            &catalog,
            &candidates,
            &ratings,
            &StopWords::english(),
            &config,
        );
        assert_eq!(result.err(), Some(ScoreError::InvalidWeights));
    }

    #[rstest]
    fn unknown_users_score_with_an_empty_profile() {
        let (catalog, candidates, _) = tables();
        let ratings = RatingsTable::default();
        let report = run_session(
            99,
            &catalog,
            &candidates,
            &ratings,
            &StopWords::english(),
            &SessionConfig::default(),
        )
        .expect("empty profiles degrade gracefully");
        assert!(report.top_books.is_empty());
        assert_eq!(report.by_jaccard.len(), 10);
    }
}
