//! Public activity feed ("the pulse").

use axum::{
    extract::{Query, State},
    Json,
};
use domain::models::activity::{ActivityEvent, DEFAULT_FEED_LIMIT};
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct PulseQuery {
    limit: Option<i64>,
}

/// Recent application activity, privacy-reduced for public display.
///
/// GET /api/pulse?limit=
pub async fn recent_activity(
    State(state): State<AppState>,
    Query(query): Query<PulseQuery>,
) -> Result<Json<Vec<ActivityEvent>>, ApiError> {
    let limit = query
        .limit
        .filter(|&l| l > 0)
        .unwrap_or(DEFAULT_FEED_LIMIT);
    let feed = state.applications.recent_activity(limit).await?;
    Ok(Json(feed))
}
