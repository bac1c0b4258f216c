//! Extractive summarization.
//!
//! Sentences are ranked by the average corpus frequency of their content
//! words and the top-ranked ones are emitted in original document order.
//! Callers must guard against empty input; `summarize` itself never fails
//! on well-formed text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Words carrying no topical signal, excluded from frequency ranking.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "can", "it", "its", "this",
    "that", "these", "those", "i", "you", "he", "she", "we", "they", "what", "which", "who",
    "when", "where", "why", "how", "all", "each", "some", "such", "no", "nor", "not", "only",
    "so", "than", "too", "very", "just", "also", "now", "then", "if", "while", "about", "into",
    "through", "during", "before", "after", "our", "your", "their",
];

static SENTENCE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]*").unwrap());

/// Force lazily built tables so the first request pays no initialization
/// cost. Idempotent; called once at process startup.
pub fn ensure_ready() {
    Lazy::force(&SENTENCE_REGEX);
}

/// Produce an extractive summary of at most `max_sentences` sentences,
/// joined with single spaces. Texts with fewer sentences than the bound are
/// returned whole, one space between sentences.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.len() <= max_sentences {
        return sentences.join(" ");
    }

    let frequencies = word_frequencies(text);

    let mut ranked: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| (index, sentence_weight(sentence, &frequencies)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    // Selected sentences are re-emitted in document order, not rank order.
    let mut selected: Vec<usize> = ranked
        .into_iter()
        .take(max_sentences)
        .map(|(index, _)| index)
        .collect();
    selected.sort_unstable();

    selected
        .into_iter()
        .map(|index| sentences[index].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_REGEX
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn word_frequencies(text: &str) -> HashMap<String, usize> {
    let mut frequencies = HashMap::new();
    for token in tokenize(text) {
        *frequencies.entry(token).or_insert(0) += 1;
    }
    frequencies
}

/// Average frequency of the sentence's content words. Averaging instead of
/// summing keeps long sentences from dominating the ranking.
fn sentence_weight(sentence: &str, frequencies: &HashMap<String, usize>) -> f64 {
    let tokens: Vec<String> = tokenize(sentence).collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let total: usize = tokens
        .iter()
        .map(|token| frequencies.get(token).copied().unwrap_or(0))
        .sum();
    total as f64 / tokens.len() as f64
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| word.len() >= 2 && !STOP_WORDS.contains(&word.as_str()))
}
