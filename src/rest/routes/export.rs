use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::error::ApiError;
use crate::report;
use crate::AppContext;

/// POST /api/export-report
///
/// Returns the current record as a plain-text attachment. 404 when there
/// is nothing to export; a failed export never touches store state.
pub async fn export_report(
    State(ctx): State<Arc<AppContext>>,
) -> Result<impl IntoResponse, ApiError> {
    let record = ctx
        .store
        .current()
        .await?
        .ok_or(ApiError::NoCurrentInterview)?;
    let body = report::render(&record).map_err(ApiError::Export)?;

    let headers = [
        (CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", report::REPORT_FILENAME),
        ),
    ];
    Ok((headers, body))
}
