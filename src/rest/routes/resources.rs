use axum::Json;
use serde_json::{json, Value};

use crate::resources::{
    ResourceLink, SkillLink, PERFORMANCE_RESOURCES, PRICING_URL, YOUTUBE_SKILLS,
};

/// GET /api/youtube-skills
pub async fn youtube_skills() -> Json<Vec<SkillLink>> {
    Json(YOUTUBE_SKILLS.clone())
}

/// GET /api/pricing
pub async fn pricing() -> Json<Value> {
    Json(json!({ "url": PRICING_URL }))
}

/// GET /api/performance-resources
pub async fn performance_resources() -> Json<Vec<ResourceLink>> {
    Json(PERFORMANCE_RESOURCES.clone())
}
