use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::analysis::{Vocabulary, sentiment, sentiment::Sentiment};

/// Signal detection output for one text. A pure function of the text and
/// vocabulary: analyzing the same input twice yields identical results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    /// Vocabulary keywords found in the text, in vocabulary order.
    pub keywords: Vec<String>,
    pub sentiment: Sentiment,
    pub word_count: usize,
    /// Total occurrences of positive-polarity words.
    pub positive_signals: usize,
    /// Total occurrences of negative-polarity words.
    pub negative_signals: usize,
    /// CTA phrases found in the text, in vocabulary order.
    pub ctas: Vec<String>,
    /// Competitor names found in the text, in vocabulary order.
    pub competitors: Vec<String>,
}

/// Scan `text` against the five vocabulary lists.
///
/// Matching policies differ by list and are deliberately preserved as-is:
/// keywords and competitor names match case-insensitively as substrings,
/// while CTA phrases match case-sensitively. Empty text is valid input and
/// produces all-zero results.
pub fn analyze(text: &str, vocab: &Vocabulary) -> AnalysisResult {
    let lowered = text.to_lowercase();

    let keywords = contained_entries(&lowered, vocab.keywords());
    let competitors = contained_entries(&lowered, vocab.competitors());

    // CTA phrases keep their casing: "buy now" does not match "Buy Now".
    let ctas = vocab
        .ctas()
        .iter()
        .filter(|cta| text.contains(cta.as_str()))
        .cloned()
        .collect();

    let positive_signals = occurrence_total(&lowered, vocab.positive());
    let negative_signals = occurrence_total(&lowered, vocab.negative());

    AnalysisResult {
        keywords,
        sentiment: sentiment::resolve(positive_signals, negative_signals),
        word_count: text.split_whitespace().count(),
        positive_signals,
        negative_signals,
        ctas,
        competitors,
    }
}

/// Subset of `entries` contained in the lowercased text, vocabulary order
/// preserved. Entries are unique by construction, so no deduplication.
fn contained_entries(lowered_text: &str, entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| lowered_text.contains(entry.to_lowercase().as_str()))
        .cloned()
        .collect()
}

/// Total occurrence count of all `entries` in the lowercased text. Repeated
/// matches of the same entry all count.
fn occurrence_total(lowered_text: &str, entries: &[String]) -> usize {
    entries
        .iter()
        .map(|entry| lowered_text.matches(entry.to_lowercase().as_str()).count())
        .sum()
}
