use crate::error::Result;
use crate::models::job::Job;
use sqlx::PgPool;
use uuid::Uuid;

const JOB_COLUMNS: &str = "id, organization_id, title, created_at";

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(job)
    }

    pub async fn list_for_organization(&self, organization_id: Uuid) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE organization_id = $1 ORDER BY created_at DESC"
        ))
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    pub async fn create(&self, organization_id: Uuid, title: &str) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(&format!(
            "INSERT INTO jobs (organization_id, title) VALUES ($1, $2) RETURNING {JOB_COLUMNS}"
        ))
        .bind(organization_id)
        .bind(title)
        .fetch_one(&self.pool)
        .await?;
        Ok(job)
    }
}
