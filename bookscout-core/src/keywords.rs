//! Title keyword extraction.
//!
//! Titles are normalised into a deduplicated, ordered list of significant
//! words: lowercased, stripped of punctuation, tokenised on whitespace, and
//! filtered against a caller-supplied stop-word set plus a fixed domain
//! blacklist of publishing terms.

use std::collections::HashSet;

/// Publishing terms that say nothing about a book's subject.
const TITLE_BLACKLIST: [&str; 5] = ["paperback", "novel", "vol", "hardcover", "edition"];

/// English stop words, after the NLTK list the original data pipeline used.
///
/// Contracted forms are listed in their tokenised shape ("don" rather than
/// "don't"); the extractor strips apostrophes before matching.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn",
    "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan",
    "shouldn", "wasn", "weren", "won", "wouldn",
];

/// A set of words to drop during keyword extraction.
///
/// The extractor treats stop words as an injected capability so tests and
/// non-English catalogs can supply their own set.
///
/// # Examples
/// ```
/// use bookscout_core::StopWords;
///
/// let stop_words = StopWords::english();
/// assert!(stop_words.contains("the"));
/// assert!(!stop_words.contains("great"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a set from arbitrary words, lowercasing each entry.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    /// The default English set.
    #[must_use]
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOP_WORDS)
    }

    /// An empty set; nothing is filtered.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Report whether `word` is in the set. Callers lowercase first.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Report whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Extract the significant words of a book title, in first-occurrence order.
///
/// The title is lowercased and every character that is not alphanumeric or an
/// underscore becomes whitespace. The remaining tokens are kept unless they
/// are stop words, blacklisted publishing terms, duplicates of an earlier
/// token, or a single character. The function is pure: identical input and
/// stop-word set always yield the identical sequence.
///
/// # Examples
/// ```
/// use bookscout_core::{StopWords, extract_keywords};
///
/// let keywords = extract_keywords("The Great Novel, Paperback Edition!", &StopWords::english());
/// assert_eq!(keywords, vec!["great"]);
/// ```
#[must_use]
pub fn extract_keywords(title: &str, stop_words: &StopWords) -> Vec<String> {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();

    let mut keywords: Vec<String> = Vec::new();
    for token in cleaned.split_whitespace() {
        if token.chars().count() <= 1 {
            continue;
        }
        if stop_words.contains(token) {
            continue;
        }
        if TITLE_BLACKLIST.contains(&token) {
            continue;
        }
        if keywords.iter().any(|kept| kept.as_str() == token) {
            continue;
        }
        keywords.push(token.to_owned());
    }
    keywords
}
