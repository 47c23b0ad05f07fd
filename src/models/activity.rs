use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Immutable log entry for a stage transition. `from_stage` is null for
/// entries recorded without a known prior stage.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StageActivity {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub user_id: Uuid,
    pub from_stage: Option<String>,
    pub to_stage: String,
    pub created_at: DateTime<Utc>,
}
