pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod pipeline;
pub mod routes;
pub mod services;

use crate::services::{
    activity_service::ActivityService, board_service::BoardService,
    candidate_service::CandidateService, comment_service::CommentService,
    job_service::JobService, profile_service::ProfileService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub job_service: JobService,
    pub candidate_service: CandidateService,
    pub comment_service: CommentService,
    pub activity_service: ActivityService,
    pub profile_service: ProfileService,
    pub board_service: BoardService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let job_service = JobService::new(pool.clone());
        let candidate_service = CandidateService::new(pool.clone());
        let comment_service = CommentService::new(pool.clone());
        let activity_service = ActivityService::new(pool.clone());
        let profile_service = ProfileService::new(pool.clone());
        let board_service = BoardService::new(pool.clone());

        Self {
            pool,
            job_service,
            candidate_service,
            comment_service,
            activity_service,
            profile_service,
            board_service,
        }
    }
}
