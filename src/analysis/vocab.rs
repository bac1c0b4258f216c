//! Detection vocabularies.
//!
//! Five fixed lists drive all signal detection. They are injected at
//! construction so tests can substitute small lists, and never mutated
//! afterwards; the production set is a shared read-only static.

use once_cell::sync::Lazy;

/// The five detection lists, fixed at construction time.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    keywords: Vec<String>,
    positive: Vec<String>,
    negative: Vec<String>,
    ctas: Vec<String>,
    competitors: Vec<String>,
}

impl Vocabulary {
    pub fn new(
        keywords: impl IntoIterator<Item = impl Into<String>>,
        positive: impl IntoIterator<Item = impl Into<String>>,
        negative: impl IntoIterator<Item = impl Into<String>>,
        ctas: impl IntoIterator<Item = impl Into<String>>,
        competitors: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        fn collect(items: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
            items.into_iter().map(Into::into).collect()
        }
        Self {
            keywords: collect(keywords),
            positive: collect(positive),
            negative: collect(negative),
            ctas: collect(ctas),
            competitors: collect(competitors),
        }
    }

    /// The production marketing vocabulary.
    pub fn marketing() -> Self {
        Self::new(
            [
                "ROAS",
                "CTR",
                "conversion",
                "campaign",
                "audience",
                "targeting",
                "ad spend",
                "CPC",
                "impressions",
                "engagement",
            ],
            ["increase", "growth", "success", "improve", "boost"],
            ["decline", "issue", "problem", "challenge", "drop"],
            ["Buy Now", "Sign Up", "Learn More", "Get Started", "Subscribe"],
            ["Hootsuite", "HubSpot", "Mailchimp", "Canva", "Google Ads"],
        )
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
    pub fn positive(&self) -> &[String] {
        &self.positive
    }
    pub fn negative(&self) -> &[String] {
        &self.negative
    }
    pub fn ctas(&self) -> &[String] {
        &self.ctas
    }
    pub fn competitors(&self) -> &[String] {
        &self.competitors
    }
}

/// Shared production vocabulary. Read-only after initialization, so it is
/// safe to share across concurrent requests without locking.
pub static MARKETING: Lazy<Vocabulary> = Lazy::new(Vocabulary::marketing);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marketing_lists_are_complete() {
        let vocab = Vocabulary::marketing();
        assert_eq!(vocab.keywords().len(), 10);
        assert_eq!(vocab.positive().len(), 5);
        assert_eq!(vocab.negative().len(), 5);
        assert_eq!(vocab.ctas().len(), 5);
        assert_eq!(vocab.competitors().len(), 5);
    }

    #[test]
    fn custom_lists_are_preserved_in_order() {
        let vocab = Vocabulary::new(
            ["alpha", "beta"],
            ["good"],
            ["bad"],
            ["Act Now"],
            ["Rival"],
        );
        assert_eq!(vocab.keywords(), ["alpha", "beta"]);
        assert_eq!(vocab.ctas(), ["Act Now"]);
    }
}
