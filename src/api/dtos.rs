use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// URL of the page to analyze.
    pub url: String,
}

impl AnalyzeRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("URL must not be empty".to_string());
        }
        url::Url::parse(&self.url).map_err(|e| format!("Invalid URL: {e}"))?;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
