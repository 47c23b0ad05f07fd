use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A candidate on a job's board. `stage` is always a member of the fixed
/// pipeline set; every write path goes through `pipeline::stage::Stage` and
/// the column carries a matching CHECK constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: Uuid,
    pub job_id: Uuid,
    pub name: String,
    pub linkedin_url: Option<String>,
    pub stage: String,
    pub created_at: DateTime<Utc>,
}
