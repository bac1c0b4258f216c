use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Coarse three-way sentiment derived from polarity signal counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Pure function of the two signal counts. Ties, including zero/zero, are
/// Neutral.
pub fn resolve(positive: usize, negative: usize) -> Sentiment {
    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_per_tie_rule() {
        assert_eq!(resolve(2, 0), Sentiment::Positive);
        assert_eq!(resolve(0, 2), Sentiment::Negative);
        assert_eq!(resolve(1, 1), Sentiment::Neutral);
        assert_eq!(resolve(0, 0), Sentiment::Neutral);
    }
}
