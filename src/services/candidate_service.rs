use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::pipeline::stage::Stage;
use sqlx::PgPool;
use uuid::Uuid;

const CANDIDATE_COLUMNS: &str = "id, job_id, name, linkedin_url, stage, created_at";

#[derive(Clone)]
pub struct CandidateService {
    pool: PgPool,
}

impl CandidateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(candidate)
    }

    /// Candidates of one job, oldest first: board columns render in the
    /// order candidates arrived.
    pub async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<Candidate>> {
        let candidates = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE job_id = $1 ORDER BY created_at ASC"
        ))
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(candidates)
    }

    pub async fn create(
        &self,
        job_id: Uuid,
        name: &str,
        linkedin_url: Option<&str>,
        stage: Stage,
    ) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "INSERT INTO candidates (job_id, name, linkedin_url, stage) \
             VALUES ($1, $2, $3, $4) RETURNING {CANDIDATE_COLUMNS}"
        ))
        .bind(job_id)
        .bind(name)
        .bind(linkedin_url)
        .bind(stage.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(candidate)
    }

    pub async fn update_stage(&self, id: Uuid, stage: Stage) -> Result<()> {
        let result = sqlx::query("UPDATE candidates SET stage = $1 WHERE id = $2")
            .bind(stage.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Candidate not found".into()));
        }
        Ok(())
    }
}
