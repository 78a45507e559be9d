use crate::dtos::{ProjectListParams, ProjectListResponse};
use crate::startup::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use service_core::error::AppError;

pub async fn list_projects(
    State(state): State<AppState>,
    params: Result<Query<ProjectListParams>, QueryRejection>,
) -> Result<Json<ProjectListResponse>, AppError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected project list query");
        AppError::BadRequest(anyhow::anyhow!(rejection.body_text()))
    })?;

    let request = params.page_request().map_err(|e| {
        tracing::warn!(error = %e, "Rejected project list query");
        e
    })?;

    let filtered = state.catalog.projects(params.status_filter());

    Ok(Json(ProjectListResponse::paginate(filtered, request)))
}
