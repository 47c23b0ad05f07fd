pub mod candidate_routes;
pub mod health;
pub mod job_routes;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};

/// All `/api` routes, behind the bearer-auth middleware.
pub fn api_router() -> Router<crate::AppState> {
    Router::new()
        .route(
            "/api/admin/jobs",
            get(job_routes::list_admin_jobs).post(job_routes::create_admin_job),
        )
        .route("/api/jobs/:job_id", get(job_routes::get_job))
        .route(
            "/api/jobs/:job_id/candidates",
            get(candidate_routes::list_candidates).post(candidate_routes::create_candidate),
        )
        .route("/api/jobs/:job_id/board", get(candidate_routes::get_board))
        .route(
            "/api/jobs/:job_id/candidates/export",
            get(candidate_routes::export_candidates),
        )
        .route(
            "/api/jobs/:job_id/candidates/import",
            post(candidate_routes::import_candidates),
        )
        .route(
            "/api/candidates/:id/stage",
            post(candidate_routes::update_candidate_stage),
        )
        .route(
            "/api/candidates/:id/comments",
            get(candidate_routes::list_comments).post(candidate_routes::create_comment),
        )
        .route(
            "/api/candidates/:id/activity",
            get(candidate_routes::list_activity),
        )
        .route(
            "/api/candidates/activity",
            post(candidate_routes::create_activity),
        )
        .layer(from_fn(crate::middleware::auth::require_bearer_auth))
}
