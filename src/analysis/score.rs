use crate::analysis::AnalysisResult;

const KEYWORD_WEIGHT: i64 = 2;
const POSITIVE_WEIGHT: i64 = 3;
const NEGATIVE_WEIGHT: i64 = 2;

/// Ad-potential score in [0, 100].
///
/// The keyword term counts unique detected keywords while the signal terms
/// use raw occurrence totals. The mismatch is inherited behavior, not a
/// normalization bug.
pub fn ad_potential(analysis: &AnalysisResult) -> u32 {
    let raw = KEYWORD_WEIGHT * analysis.keywords.len() as i64
        + POSITIVE_WEIGHT * analysis.positive_signals as i64
        - NEGATIVE_WEIGHT * analysis.negative_signals as i64;
    raw.clamp(0, 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Vocabulary, analyze};

    fn score_of(text: &str) -> u32 {
        ad_potential(&analyze(text, &Vocabulary::marketing()))
    }

    #[test]
    fn worked_example_scores_ten() {
        // 2 keywords, 2 positive signals, 0 negative: 2*2 + 3*2 - 2*0 = 10
        assert_eq!(
            score_of("Our campaign saw growth and increase in CTR. Buy Now and Subscribe!"),
            10
        );
    }

    #[test]
    fn negative_heavy_text_clamps_to_zero() {
        assert_eq!(score_of("problem problem problem issue decline drop"), 0);
    }

    #[test]
    fn score_clamps_at_one_hundred() {
        let text = "growth ".repeat(50);
        assert_eq!(score_of(&text), 100);
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(score_of(""), 0);
    }

    #[test]
    fn keyword_term_counts_unique_keywords_not_occurrences() {
        // "campaign" repeated still contributes a single keyword term.
        assert_eq!(score_of("campaign campaign campaign"), 2);
    }
}

#[cfg(all(test, feature = "fuzz"))]
mod fuzz {
    use super::*;
    use crate::analysis::{Vocabulary, analyze};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn score_always_within_bounds(text in ".*") {
            let analysis = analyze(&text, &Vocabulary::marketing());
            let score = ad_potential(&analysis);
            prop_assert!(score <= 100);
        }

        #[test]
        fn analyzer_never_panics(text in "\\PC*") {
            let _ = analyze(&text, &Vocabulary::marketing());
        }
    }
}
