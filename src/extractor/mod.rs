pub mod cleaner;
pub mod language;
pub mod model;

pub use model::Document;

use crate::fetcher::types::PageResponse;

/// Turn a fetched page into a cleaned-text document. Cleaning is total:
/// malformed markup degrades to whatever text survives parsing, and an
/// empty body yields an empty document rather than an error.
pub fn extract(resp: &PageResponse) -> Document {
    let text = cleaner::clean_html(&resp.body_utf8);
    let language = language::detect_language(&text);

    Document {
        url: resp.url_final.clone(),
        text,
        language,
        fetched_at: resp.fetched_at,
    }
}
