use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::candidate_dto::{
        BoardColumn, BoardQuery, BoardResponse, CreateActivityPayload, CreateCandidatePayload,
        CreateCommentPayload, MoveStagePayload, MoveStageResponse,
    },
    error::{Error, Result},
    middleware::auth::Claims,
    models::job::Job,
    pipeline::board::{BoardSession, MoveOutcome},
    pipeline::csv::export_filename,
    pipeline::stage::{group_by_stage, Stage},
    AppState,
};

async fn load_job(state: &AppState, job_id: Uuid) -> Result<Job> {
    state
        .job_service
        .get(job_id)
        .await?
        .ok_or_else(|| Error::NotFound("Job not found".into()))
}

#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    load_job(&state, job_id).await?;
    let candidates = state.candidate_service.list_for_job(job_id).await?;
    Ok(Json(candidates))
}

/// Stage-grouped columns for the kanban view, optionally filtered by a
/// case-insensitive name search.
#[axum::debug_handler]
pub async fn get_board(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Query(query): Query<BoardQuery>,
) -> Result<impl IntoResponse> {
    let job = load_job(&state, job_id).await?;
    let mut candidates = state.candidate_service.list_for_job(job_id).await?;

    if let Some(needle) = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
    {
        candidates.retain(|c| c.name.to_lowercase().contains(&needle));
    }

    let columns = group_by_stage(&candidates)
        .into_iter()
        .map(|(stage, group)| BoardColumn {
            stage: stage.to_string(),
            candidates: group.into_iter().cloned().collect(),
        })
        .collect();

    Ok(Json(BoardResponse { job, columns }))
}

#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(Error::BadRequest("Name is required".into()));
    }
    let linkedin_url = payload
        .linkedin_url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    load_job(&state, job_id).await?;
    let candidate = state
        .candidate_service
        .create(job_id, name, linkedin_url, Stage::Applied)
        .await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

#[utoipa::path(
    post,
    path = "/api/candidates/{id}/stage",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate moved; an activity record was appended"),
        (status = 400, description = "Unknown stage"),
        (status = 404, description = "Candidate not found"),
        (status = 500, description = "Stage update failed; nothing was persisted")
    )
)]
#[axum::debug_handler]
pub async fn update_candidate_stage(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MoveStagePayload>,
) -> Result<impl IntoResponse> {
    let target = Stage::parse(&payload.stage)
        .ok_or_else(|| Error::BadRequest(format!("Unknown stage: {}", payload.stage)))?;
    let actor = claims.user_id()?;

    let candidate = state
        .candidate_service
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Candidate not found".into()))?;

    let mut session = BoardSession::new(candidate.job_id, vec![candidate]);
    let outcome = session
        .move_candidate(&state.board_service, actor, id, target)
        .await?;

    let candidate = session
        .into_candidates()
        .pop()
        .ok_or_else(|| Error::Internal("working set lost its candidate".into()))?;
    Ok(Json(MoveStageResponse {
        candidate,
        moved: matches!(outcome, MoveOutcome::Moved { .. }),
    }))
}

#[axum::debug_handler]
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let comments = state.comment_service.list_for_candidate(id).await?;
    Ok(Json(comments))
}

#[axum::debug_handler]
pub async fn create_comment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateCommentPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let body = payload.body.trim();
    if body.is_empty() {
        return Err(Error::BadRequest("Comment body is required".into()));
    }
    let user_id = claims.user_id()?;
    let comment = state.comment_service.create(id, user_id, body).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

#[axum::debug_handler]
pub async fn list_activity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let activities = state.activity_service.list_for_candidate(id).await?;
    Ok(Json(activities))
}

/// Explicit activity append, mirroring the stage log the drag-move writes.
/// `from_stage` may be omitted; both stages must belong to the pipeline.
#[axum::debug_handler]
pub async fn create_activity(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateActivityPayload>,
) -> Result<impl IntoResponse> {
    let (Some(candidate_id), Some(to_stage)) = (
        payload.candidate_id,
        payload.to_stage.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err(Error::BadRequest("Missing candidate_id or to_stage".into()));
    };

    let to = Stage::parse(to_stage)
        .ok_or_else(|| Error::BadRequest(format!("Unknown stage: {to_stage}")))?;
    let from = match payload.from_stage.as_deref() {
        None => None,
        Some(s) => Some(
            Stage::parse(s).ok_or_else(|| Error::BadRequest(format!("Unknown stage: {s}")))?,
        ),
    };

    let user_id = claims.user_id()?;
    let activity = state
        .activity_service
        .create(candidate_id, user_id, from.map(|s| s.as_str()), to.as_str())
        .await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{job_id}/candidates/export",
    params(
        ("job_id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "CSV attachment: name, linkedin_url, stage, created_at"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn export_candidates(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = load_job(&state, job_id).await?;
    let session = state.board_service.load_board(job_id).await?;
    let csv = session.export_csv();

    let disposition = format!("attachment; filename=\"{}\"", export_filename(&job.title));
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}

#[utoipa::path(
    post,
    path = "/api/jobs/{job_id}/candidates/import",
    params(
        ("job_id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Import report; `message` is set on partial failure"),
        (status = 400, description = "No file or empty CSV"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn import_candidates(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let mut csv_text = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let text = field
                .text()
                .await
                .map_err(|_| Error::BadRequest("Failed to read file upload".into()))?;
            csv_text = Some(text);
            break;
        }
    }
    let text = csv_text.ok_or_else(|| Error::BadRequest("No CSV file provided".into()))?;

    load_job(&state, job_id).await?;
    let mut session = state.board_service.load_board(job_id).await?;
    let report = session.import_csv(&state.board_service, &text).await?;

    tracing::info!(
        %job_id,
        added = report.added,
        total = report.total,
        "CSV import finished"
    );
    Ok(Json(report))
}
