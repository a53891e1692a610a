use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::analysis;
use crate::error::ApiError;
use crate::record::InterviewRecord;
use crate::AppContext;

/// GET /api/current-interview
pub async fn current_interview(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<InterviewRecord>, ApiError> {
    let record = ctx
        .store
        .current()
        .await?
        .ok_or(ApiError::NoCurrentInterview)?;
    Ok(Json(record))
}

/// POST /api/new-analysis
pub async fn new_analysis(State(ctx): State<Arc<AppContext>>) -> Result<Json<Value>, ApiError> {
    let outcome = analysis::start_new_analysis(ctx.store.as_ref()).await?;
    Ok(Json(json!({
        "message": analysis::NEW_ANALYSIS_MESSAGE,
        "currentInterviewData": outcome.current,
    })))
}
