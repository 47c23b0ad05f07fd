use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use crate::{
    dto::job_dto::{AdminJobsQuery, CreateJobPayload},
    error::{Error, Result},
    middleware::auth::Claims,
    AppState,
};

/// Admin gate: bearer identity was already checked by the middleware, the
/// role comes from the caller's profile row.
async fn require_admin(state: &AppState, claims: &Claims) -> Result<Uuid> {
    let user_id = claims.user_id()?;
    let role = state.profile_service.get_role(user_id).await?;
    if role.as_deref() != Some("admin") {
        return Err(Error::Forbidden("Forbidden".into()));
    }
    Ok(user_id)
}

#[utoipa::path(
    get,
    path = "/api/admin/jobs",
    params(
        ("organization_id" = Option<Uuid>, Query, description = "Organization to list jobs for")
    ),
    responses(
        (status = 200, description = "Jobs of the organization, newest first"),
        (status = 400, description = "Missing organization_id"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not an admin")
    )
)]
#[axum::debug_handler]
pub async fn list_admin_jobs(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<AdminJobsQuery>,
) -> Result<impl IntoResponse> {
    let organization_id = query
        .organization_id
        .ok_or_else(|| Error::BadRequest("Missing organization_id".into()))?;
    require_admin(&state, &claims).await?;

    let jobs = state
        .job_service
        .list_for_organization(organization_id)
        .await?;
    Ok(Json(jobs))
}

#[utoipa::path(
    post,
    path = "/api/admin/jobs",
    responses(
        (status = 201, description = "Job created"),
        (status = 400, description = "Missing organization_id or title"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not an admin")
    )
)]
#[axum::debug_handler]
pub async fn create_admin_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    require_admin(&state, &claims).await?;

    let title = payload.title.as_deref().unwrap_or("").trim().to_string();
    let Some(organization_id) = payload.organization_id.filter(|_| !title.is_empty()) else {
        return Err(Error::BadRequest("Missing organization_id or title".into()));
    };

    let job = state.job_service.create(organization_id, &title).await?;
    tracing::info!(job_id = %job.id, %organization_id, "job created");
    Ok((StatusCode::CREATED, Json(job)))
}

#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state
        .job_service
        .get(job_id)
        .await?
        .ok_or_else(|| Error::NotFound("Job not found".into()))?;
    Ok(Json(job))
}
