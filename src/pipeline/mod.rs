//! Request orchestration.
//!
//! One request walks Idle -> Fetching -> {Analyzed | Failed}. A fetch
//! failure is terminal: it surfaces as `PipelineError::Fetch` and nothing
//! downstream runs. A successful fetch always yields a complete report,
//! even for a page that cleans down to empty text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument};
use url::Url;
use utoipa::ToSchema;

use crate::analysis::{AnalysisResult, Recommendation, Vocabulary, ad_potential, analyze, recommend};
use crate::extractor::{self, Document};
use crate::fetcher::{self, FetchError};
use crate::summarizer;

/// The content preview is the first 500 characters of cleaned text. The
/// boundary is a contract consumed by presentation layers.
pub const PREVIEW_CHARS: usize = 500;
const PREVIEW_ELLIPSIS: &str = "...";

/// Default sentence bound for the summary.
pub const SUMMARY_SENTENCES: usize = 5;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

/// Composite analysis report for one page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Report {
    pub url: Url,
    pub language: Option<String>,
    pub fetched_at: DateTime<Utc>,
    pub analysis: AnalysisResult,
    /// Ad-potential score in [0, 100].
    pub score: u32,
    pub recommendations: Vec<Recommendation>,
    pub summary: String,
    pub preview: String,
}

/// Fetch, clean, and analyze a single page.
#[instrument(skip(vocab, fetch_timeout), fields(url = %url))]
pub async fn analyze_url(
    url: &str,
    vocab: &Vocabulary,
    summary_sentences: usize,
    fetch_timeout: Duration,
) -> Result<Report, PipelineError> {
    let response = fetcher::fetch_with_timeout(url, fetch_timeout).await?;
    let document = extractor::extract(&response);

    info!(
        url = %document.url,
        chars = document.text.len(),
        language = document.language.as_deref().unwrap_or("unknown"),
        "page fetched and cleaned"
    );

    Ok(analyze_document(&document, vocab, summary_sentences))
}

/// Analysis half of the pipeline, independent of the network boundary.
/// Deterministic for a given document and vocabulary.
pub fn analyze_document(
    document: &Document,
    vocab: &Vocabulary,
    summary_sentences: usize,
) -> Report {
    let analysis = analyze(&document.text, vocab);
    let score = ad_potential(&analysis);
    let recommendations = recommend(&analysis);

    // The summarizer assumes non-empty input; guard rather than call it.
    let summary = if document.text.trim().is_empty() {
        String::new()
    } else {
        summarizer::summarize(&document.text, summary_sentences)
    };

    Report {
        url: document.url.clone(),
        language: document.language.clone(),
        fetched_at: document.fetched_at,
        analysis,
        score,
        recommendations,
        summary,
        preview: preview(&document.text),
    }
}

/// First [`PREVIEW_CHARS`] characters of the cleaned text, with a fixed
/// ellipsis marker appended.
pub fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    out.push_str(PREVIEW_ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{RecommendationKind, Sentiment};
    use chrono::Utc;

    fn doc(text: &str) -> Document {
        Document {
            url: Url::parse("https://example.com/landing").unwrap(),
            text: text.to_string(),
            language: None,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn report_assembles_all_parts() {
        let text = "Our campaign saw growth and increase in CTR. Buy Now and Subscribe!";
        let report = analyze_document(&doc(text), &Vocabulary::marketing(), SUMMARY_SENTENCES);

        assert_eq!(report.analysis.keywords, ["CTR", "campaign"]);
        assert_eq!(report.analysis.sentiment, Sentiment::Positive);
        assert_eq!(report.score, 10);
        assert_eq!(report.recommendations.len(), 2);
        assert!(
            report
                .recommendations
                .iter()
                .all(|r| r.kind == RecommendationKind::Advisory)
        );
        // Two sentences, below the bound: the summary is the whole text.
        assert_eq!(report.summary, text);
        assert_eq!(report.preview, format!("{text}..."));
    }

    #[test]
    fn empty_text_yields_complete_empty_report() {
        let report = analyze_document(&doc(""), &Vocabulary::marketing(), SUMMARY_SENTENCES);

        assert_eq!(report.analysis.word_count, 0);
        assert_eq!(report.analysis.sentiment, Sentiment::Neutral);
        assert_eq!(report.score, 0);
        assert!(report.recommendations.is_empty());
        assert!(report.summary.is_empty());
        assert_eq!(report.preview, "...");
    }

    #[test]
    fn preview_truncates_at_boundary() {
        let text = "x".repeat(800);
        let p = preview(&text);
        assert_eq!(p.len(), PREVIEW_CHARS + 3);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn preview_is_char_boundary_safe() {
        let text = "é".repeat(600);
        let p = preview(&text);
        assert_eq!(p.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn injected_vocabulary_drives_detection() {
        let vocab = Vocabulary::new(
            ["widget"],
            ["shiny"],
            ["dull"],
            ["Order Today"],
            ["Acme Corp"],
        );
        let report = analyze_document(
            &doc("A shiny widget from Acme Corp. Order Today!"),
            &vocab,
            SUMMARY_SENTENCES,
        );

        assert_eq!(report.analysis.keywords, ["widget"]);
        assert_eq!(report.analysis.ctas, ["Order Today"]);
        assert_eq!(report.analysis.competitors, ["Acme Corp"]);
        assert_eq!(report.analysis.sentiment, Sentiment::Positive);
        // widget (2) + shiny (3): score 5, plus a competitor warning.
        assert_eq!(report.score, 5);
        assert_eq!(
            report.recommendations.last().unwrap().kind,
            RecommendationKind::Warning
        );
    }
}
