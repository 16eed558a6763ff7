use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::{
    CreateDeveloper, CreatedDeveloper, DeveloperDetail, DeveloperSummary, EditDeveloper,
};
use crate::application::DeveloperService;

/// List all employed developers
///
/// GET /developers
pub async fn list_developers(
    State(service): State<Arc<DeveloperService>>,
) -> Result<Json<Vec<DeveloperSummary>>, ApiError> {
    tracing::info!("GET /developers");

    let developers = service.list_employed_developers().await?;

    Ok(Json(developers))
}

/// Get a developer by member id
///
/// GET /developers/:member_id
pub async fn get_developer(
    State(service): State<Arc<DeveloperService>>,
    Path(member_id): Path<String>,
) -> Result<Json<DeveloperDetail>, ApiError> {
    tracing::info!(member_id = %member_id, "GET /developers/:member_id");

    let detail = service.get_developer_detail(&member_id).await?;

    Ok(Json(detail))
}

/// Create a new developer
///
/// POST /create-developer
pub async fn create_developer(
    State(service): State<Arc<DeveloperService>>,
    payload: Result<Json<CreateDeveloper>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedDeveloper>), ApiError> {
    let Json(req) = payload?;
    tracing::info!(request = ?req, "POST /create-developer");

    req.validate()?;
    let created = service.create_developer(req).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Edit a developer's level, skill type and experience
///
/// PUT /developer/:member_id
pub async fn edit_developer(
    State(service): State<Arc<DeveloperService>>,
    Path(member_id): Path<String>,
    payload: Result<Json<EditDeveloper>, JsonRejection>,
) -> Result<Json<DeveloperDetail>, ApiError> {
    let Json(req) = payload?;
    tracing::info!(member_id = %member_id, request = ?req, "PUT /developer/:member_id");

    req.validate()?;
    let detail = service.edit_developer(&member_id, req).await?;

    Ok(Json(detail))
}

/// Retire a developer
///
/// DELETE /developer/:member_id
pub async fn delete_developer(
    State(service): State<Arc<DeveloperService>>,
    Path(member_id): Path<String>,
) -> Result<Json<DeveloperDetail>, ApiError> {
    tracing::info!(member_id = %member_id, "DELETE /developer/:member_id");

    let detail = service.delete_developer(&member_id).await?;

    Ok(Json(detail))
}
