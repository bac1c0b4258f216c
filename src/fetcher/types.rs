use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

/// A successfully fetched page, decoded to UTF-8.
#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub body_utf8: String,
    /// Name of the encoding the body was decoded from (e.g. "UTF-8").
    pub charset: &'static str,
    pub fetched_at: DateTime<Utc>,
}
