use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::analysis::{AnalysisResult, Sentiment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RecommendationKind {
    Advisory,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
}

impl Recommendation {
    fn advisory(message: impl Into<String>) -> Self {
        Self {
            kind: RecommendationKind::Advisory,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: RecommendationKind::Warning,
            message: message.into(),
        }
    }
}

/// Apply the recommendation rules in fixed order. Rules are independent:
/// every applicable rule fires, and an empty result is valid.
pub fn recommend(analysis: &AnalysisResult) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if analysis.sentiment == Sentiment::Positive {
        recs.push(Recommendation::advisory("Boost ad spend on this content"));
    }

    // Exact match against the one vocabulary entry, not a substring test.
    if analysis.keywords.iter().any(|kw| kw == "CTR") {
        recs.push(Recommendation::advisory(
            "A/B test headlines for better CTR",
        ));
    }

    if !analysis.competitors.is_empty() {
        recs.push(Recommendation::warning(format!(
            "Monitor competitors: {}",
            analysis.competitors.join(", ")
        )));
    }

    recs
}
