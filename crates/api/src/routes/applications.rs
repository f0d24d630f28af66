//! Application routes: public submission and the admin review console.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::application::{
    Application, ApprovalOutcome, BulkApprovalSummary, BulkApproveRequest,
    SubmitApplicationRequest,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

/// Submit a new membership application.
///
/// POST /api/applications
pub async fn submit_application(
    State(state): State<AppState>,
    Json(request): Json<SubmitApplicationRequest>,
) -> Result<(StatusCode, Json<Application>), ApiError> {
    let application = state.applications.submit(request).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// List all applications in review order.
///
/// GET /api/applications
///
/// Requires the shared admin password.
pub async fn list_applications(
    State(state): State<AppState>,
    _admin: AdminAuth,
) -> Result<Json<Vec<Application>>, ApiError> {
    let applications = state.applications.list_for_review().await?;
    Ok(Json(applications))
}

/// Approve one application and attempt invite delivery.
///
/// PATCH /api/applications/:id/approve
///
/// Requires the shared admin password. The response carries the updated
/// record plus an `emailSent` flag; notification failure does not fail the
/// request.
pub async fn approve_application(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<i32>,
) -> Result<Json<ApprovalOutcome>, ApiError> {
    let outcome = state.applications.approve(id).await?;
    Ok(Json(outcome))
}

/// Approve a batch of applications, best-effort per item.
///
/// POST /api/applications/bulk-approve
///
/// Requires the shared admin password. Unknown ids are skipped silently.
pub async fn bulk_approve_applications(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Json(request): Json<BulkApproveRequest>,
) -> Result<Json<BulkApprovalSummary>, ApiError> {
    let summary = state.applications.bulk_approve(&request.ids).await?;
    Ok(Json(summary))
}

/// Decline (permanently delete) an application.
///
/// DELETE /api/applications/:id
///
/// Requires the shared admin password. Idempotent: a missing id still
/// returns 204.
pub async fn decline_application(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.applications.decline(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
