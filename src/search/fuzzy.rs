//! Fuzzy text matching
//!
//! Token-based: every query word is compared with the words of a field, so
//! "carbn captur" still finds "Carbon capture at home". A score of 0.0 is a
//! perfect match and 1.0 no match at all.

use strsim::normalized_damerau_levenshtein;

use super::Searchable;

/// Scores up to this value count as a match unless configured otherwise
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// An item accepted by a search, with its position in the input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    pub index: usize,
    pub score: f64,
}

/// Approximate matcher with a fixed tolerance
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl FuzzyMatcher {
    /// Create a matcher accepting scores up to `threshold` (clamped to 0..=1)
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score `query` against `text`; `None` when it is not a match
    pub fn score(&self, query: &str, text: &str) -> Option<f64> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        let score = field_score(&query, &tokenize(&query), text)?;
        (score <= self.threshold).then_some(score)
    }

    /// Match `query` against the given fields of every item.
    ///
    /// Each item takes the score of its best field. Hits are ordered best
    /// first; equal scores keep input order.
    pub fn search<T: Searchable>(&self, items: &[T], keys: &[String], query: &str) -> Vec<SearchHit> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let tokens = tokenize(&query);

        let mut hits: Vec<SearchHit> = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let score = keys
                    .iter()
                    .filter_map(|key| item.field(key))
                    .filter_map(|text| field_score(&query, &tokens, &text))
                    .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.min(s))))?;
                (score <= self.threshold).then_some(SearchHit { index, score })
            })
            .collect();

        // sort_by is stable, ties stay in input order
        hits.sort_by(|a, b| a.score.total_cmp(&b.score));
        tracing::debug!("Search {:?}: {} of {} items", query, hits.len(), items.len());
        hits
    }
}

/// Lowercased words of a text
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Score a lowercased query against one field; `None` when nothing is comparable
fn field_score(query: &str, query_tokens: &[String], text: &str) -> Option<f64> {
    let text_lower = text.to_lowercase();
    if text_lower.contains(query) {
        return Some(0.0);
    }

    let words = tokenize(&text_lower);
    if query_tokens.is_empty() || words.is_empty() {
        return None;
    }

    let total: f64 = query_tokens
        .iter()
        .map(|token| {
            words
                .iter()
                .map(|word| word_distance(token, word))
                .fold(1.0, f64::min)
        })
        .sum();
    Some(total / query_tokens.len() as f64)
}

/// Distance between one query word and one text word, in 0.0..=1.0
fn word_distance(token: &str, word: &str) -> f64 {
    if word.contains(token) {
        return 0.0;
    }

    let whole = 1.0 - normalized_damerau_levenshtein(token, word);

    // Partially typed words: compare against the word's prefix of equal length
    let token_len = token.chars().count();
    if word.chars().count() > token_len {
        let prefix: String = word.chars().take(token_len).collect();
        let partial = 1.0 - normalized_damerau_levenshtein(token, &prefix);
        whole.min(partial)
    } else {
        whole
    }
}
