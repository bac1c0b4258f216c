pub mod analyzer;
pub mod recommend;
pub mod score;
pub mod sentiment;
pub mod vocab;

pub use analyzer::{AnalysisResult, analyze};
pub use recommend::{Recommendation, RecommendationKind, recommend};
pub use score::ad_potential;
pub use sentiment::Sentiment;
pub use vocab::Vocabulary;
