//! Report and moderation handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use arcade_core::entities::ReportStatus;
use arcade_limiter::Quota;
use arcade_service::dto::{CreateReportRequest, ResolveReportRequest};
use arcade_service::{ReportResponse, ReportService};
use serde::Deserialize;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// File a report against a game, comment, or profile
///
/// POST /reports
pub async fn create_report(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateReportRequest>,
) -> ApiResult<Created<Json<ReportResponse>>> {
    state.check_quota(&format!("report:{}", auth.profile_id), Quota::REPORTS)?;

    let service = ReportService::new(state.service_context());
    let response = service.create(auth.profile_id, request).await?;
    Ok(Created(Json(response)))
}

/// Query parameters for the moderation queue
#[derive(Debug, Deserialize)]
pub struct ReportListParams {
    /// `pending`, `removed`, `dismissed`, or `all` (default `pending`)
    pub status: Option<String>,
}

/// Moderation queue (admin)
///
/// GET /admin/reports
pub async fn list_reports(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ReportListParams>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<ReportResponse>>> {
    let status = match params.status.as_deref() {
        None => Some(ReportStatus::Pending),
        Some("all") => None,
        Some(raw) => Some(
            ReportStatus::parse(raw)
                .ok_or_else(|| ApiError::invalid_query(format!("Unknown status: {raw}")))?,
        ),
    };

    let service = ReportService::new(state.service_context());
    let response = service
        .list(auth.profile_id, status, pagination.limit)
        .await?;
    Ok(Json(response))
}

/// Resolve a report (admin)
///
/// POST /admin/reports/{report_id}/resolve
pub async fn resolve_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(report_id): Path<String>,
    Json(request): Json<ResolveReportRequest>,
) -> ApiResult<Json<ReportResponse>> {
    let report_id = report_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid report_id format"))?;

    let service = ReportService::new(state.service_context());
    let response = service.resolve(report_id, auth.profile_id, request).await?;
    Ok(Json(response))
}
