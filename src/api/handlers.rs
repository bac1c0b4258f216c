use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::{
    analysis::vocab,
    api::dtos::{AnalyzeRequest, ErrorResponse},
    app_state::AppState,
    pipeline::{self, Report},
};

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis completed", body = Report),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 502, description = "Page could not be fetched", body = ErrorResponse)
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Response {
    if let Err(reason) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: reason })).into_response();
    }

    match pipeline::analyze_url(
        &payload.url,
        &vocab::MARKETING,
        state.config.summary_sentences(),
        state.config.fetch_timeout(),
    )
    .await
    {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => {
            // Fetch failure means no document: a single error, no partial
            // analysis.
            warn!(url = %payload.url, error = %err, "analysis failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
