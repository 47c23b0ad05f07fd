use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::pipeline::board::{BoardSession, PipelineStore};
use crate::pipeline::stage::Stage;
use crate::services::activity_service::ActivityService;
use crate::services::candidate_service::CandidateService;

/// Postgres-backed [`PipelineStore`]: the persistence collaborator the
/// board working set runs against in production.
#[derive(Clone)]
pub struct BoardService {
    candidates: CandidateService,
    activities: ActivityService,
}

impl BoardService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            candidates: CandidateService::new(pool.clone()),
            activities: ActivityService::new(pool),
        }
    }

    /// Load a job's candidates into a fresh working set.
    pub async fn load_board(&self, job_id: Uuid) -> Result<BoardSession> {
        let candidates = self.candidates.list_for_job(job_id).await?;
        Ok(BoardSession::new(job_id, candidates))
    }
}

#[async_trait]
impl PipelineStore for BoardService {
    async fn insert_candidate(
        &self,
        job_id: Uuid,
        name: String,
        linkedin_url: Option<String>,
        stage: Stage,
    ) -> Result<Candidate> {
        self.candidates
            .create(job_id, &name, linkedin_url.as_deref(), stage)
            .await
    }

    async fn update_stage(&self, candidate_id: Uuid, stage: Stage) -> Result<()> {
        self.candidates.update_stage(candidate_id, stage).await
    }

    async fn record_transition(
        &self,
        candidate_id: Uuid,
        user_id: Uuid,
        from_stage: Option<Stage>,
        to_stage: Stage,
    ) -> Result<()> {
        self.activities
            .create(
                candidate_id,
                user_id,
                from_stage.map(|s| s.as_str()),
                to_stage.as_str(),
            )
            .await?;
        Ok(())
    }
}
