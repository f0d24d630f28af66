//! Invite redemption endpoint.

use axum::{
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct JoinQuery {
    token: Option<String>,
}

/// Redeem a single-use invite and redirect into the community channel.
///
/// GET /api/join?token=
///
/// Invalid or already-used tokens produce an error response instead of a
/// redirect.
pub async fn redeem_invite(
    State(state): State<AppState>,
    Query(query): Query<JoinQuery>,
) -> Result<Redirect, ApiError> {
    let token = query
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::validation("token", "Invalid invite link."))?;

    state.applications.redeem_invite(&token).await?;

    Ok(Redirect::to(&state.config.community.join_url))
}
