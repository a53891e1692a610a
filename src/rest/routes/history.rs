use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::record::{HistorySummary, InterviewRecord};
use crate::AppContext;

/// GET /api/history
///
/// Always succeeds; an empty store yields `[]`.
pub async fn list_history(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Vec<HistorySummary>>, ApiError> {
    Ok(Json(ctx.store.history_summaries().await?))
}

/// GET /api/history/{id}
pub async fn history_detail(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<InterviewRecord>, ApiError> {
    let record = ctx
        .store
        .history_detail(&id)
        .await?
        .ok_or(ApiError::HistoryNotFound)?;
    Ok(Json(record))
}
