use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct AdminJobsQuery {
    pub organization_id: Option<Uuid>,
}

/// Both fields are optional at the wire level so a missing one maps to the
/// 400 "Missing organization_id or title" response instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJobPayload {
    pub organization_id: Option<Uuid>,
    pub title: Option<String>,
}
