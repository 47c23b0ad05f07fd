use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::candidate::Candidate;
use crate::models::job::Job;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCandidatePayload {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub linkedin_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveStagePayload {
    pub stage: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveStageResponse {
    pub candidate: Candidate,
    /// False when the drop target equaled the current stage (no-op).
    pub moved: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentPayload {
    #[validate(length(min = 1, message = "Comment body is required"))]
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateActivityPayload {
    pub candidate_id: Option<Uuid>,
    pub from_stage: Option<String>,
    pub to_stage: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    pub stage: String,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardResponse {
    pub job: Job,
    pub columns: Vec<BoardColumn>,
}
