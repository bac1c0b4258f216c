use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Cleaned plain text of a single fetched page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub url: Url,
    pub text: String,
    pub language: Option<String>,
    pub fetched_at: DateTime<Utc>,
}
