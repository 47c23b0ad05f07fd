use crate::error::Result;
use crate::models::activity::StageActivity;
use sqlx::PgPool;
use uuid::Uuid;

const ACTIVITY_COLUMNS: &str = "id, candidate_id, user_id, from_stage, to_stage, created_at";

#[derive(Clone)]
pub struct ActivityService {
    pool: PgPool,
}

impl ActivityService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Stage-change log for a candidate, newest first.
    pub async fn list_for_candidate(&self, candidate_id: Uuid) -> Result<Vec<StageActivity>> {
        let activities = sqlx::query_as::<_, StageActivity>(&format!(
            "SELECT {ACTIVITY_COLUMNS} FROM candidate_activities \
             WHERE candidate_id = $1 ORDER BY created_at DESC"
        ))
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(activities)
    }

    pub async fn create(
        &self,
        candidate_id: Uuid,
        user_id: Uuid,
        from_stage: Option<&str>,
        to_stage: &str,
    ) -> Result<StageActivity> {
        let activity = sqlx::query_as::<_, StageActivity>(&format!(
            "INSERT INTO candidate_activities (candidate_id, user_id, from_stage, to_stage) \
             VALUES ($1, $2, $3, $4) RETURNING {ACTIVITY_COLUMNS}"
        ))
        .bind(candidate_id)
        .bind(user_id)
        .bind(from_stage)
        .bind(to_stage)
        .fetch_one(&self.pool)
        .await?;
        Ok(activity)
    }
}
