//! The candidate board working set.
//!
//! A [`BoardSession`] holds the in-memory working copies of one job's
//! candidates for the duration of a UI session. All persistence goes through
//! the [`PipelineStore`] collaborator; the session itself never owns storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::pipeline::csv;
use crate::pipeline::stage::{group_by_stage, Stage};

/// Row-level persistence collaborator for the board. The production
/// implementation writes to Postgres; tests substitute fakes to simulate
/// remote failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PipelineStore: Send + Sync {
    async fn insert_candidate(
        &self,
        job_id: Uuid,
        name: String,
        linkedin_url: Option<String>,
        stage: Stage,
    ) -> Result<Candidate>;

    async fn update_stage(&self, candidate_id: Uuid, stage: Stage) -> Result<()>;

    async fn record_transition(
        &self,
        candidate_id: Uuid,
        user_id: Uuid,
        from_stage: Option<Stage>,
        to_stage: Stage,
    ) -> Result<()>;
}

/// Outcome of a drag-move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: Option<Stage>, to: Stage },
    /// Dropped onto the stage the candidate already occupies; no side
    /// effects were performed.
    Unchanged,
}

/// Summary of a bulk import run. `message` is set only on partial failure.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ImportReport {
    pub added: usize,
    pub total: usize,
    pub message: Option<String>,
}

pub struct BoardSession {
    job_id: Uuid,
    candidates: Vec<Candidate>,
}

impl BoardSession {
    pub fn new(job_id: Uuid, candidates: Vec<Candidate>) -> Self {
        Self { job_id, candidates }
    }

    pub fn job_id(&self) -> Uuid {
        self.job_id
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }

    /// Board columns in fixed pipeline order.
    pub fn grouped(&self) -> Vec<(Stage, Vec<&Candidate>)> {
        group_by_stage(&self.candidates)
    }

    /// Move a candidate to `target`, optimistically: the working copy is
    /// mutated before the remote write so callers can render the move
    /// immediately. A failed stage update rolls the working copy back and
    /// surfaces the error. The activity record written after a successful
    /// update is fire-and-forget; its failure never un-moves the candidate.
    pub async fn move_candidate(
        &mut self,
        store: &dyn PipelineStore,
        actor: Uuid,
        candidate_id: Uuid,
        target: Stage,
    ) -> Result<MoveOutcome> {
        let pos = self
            .candidates
            .iter()
            .position(|c| c.id == candidate_id)
            .ok_or_else(|| crate::error::Error::NotFound("Candidate not found".into()))?;

        let previous = self.candidates[pos].stage.clone();
        if previous == target.as_str() {
            return Ok(MoveOutcome::Unchanged);
        }
        let from = Stage::parse(&previous);

        self.candidates[pos].stage = target.as_str().to_string();

        if let Err(err) = store.update_stage(candidate_id, target).await {
            self.candidates[pos].stage = previous;
            return Err(err);
        }

        if let Err(err) = store
            .record_transition(candidate_id, actor, from, target)
            .await
        {
            tracing::warn!(
                %candidate_id,
                error = %err,
                "stage moved but activity record failed"
            );
        }

        Ok(MoveOutcome::Moved { from, to: target })
    }

    /// Bulk-import candidates from CSV text. Rows are parsed up front (no
    /// I/O), then created one at a time in `Applied`; each success is
    /// appended to the working set immediately. A failed row neither aborts
    /// the batch nor rolls back earlier rows; the report carries a summary
    /// message when some rows were lost.
    pub async fn import_csv(
        &mut self,
        store: &dyn PipelineStore,
        text: &str,
    ) -> Result<ImportReport> {
        let rows = csv::parse_import(text)?;
        let total = rows.len();
        let mut added = 0;

        for row in &rows {
            match store
                .insert_candidate(
                    self.job_id,
                    row.name.clone(),
                    row.linkedin_url.clone(),
                    Stage::Applied,
                )
                .await
            {
                Ok(candidate) => {
                    self.candidates.push(candidate);
                    added += 1;
                }
                Err(err) => {
                    tracing::warn!(name = %row.name, error = %err, "import row failed");
                }
            }
        }

        let message = (total > 0 && added < total).then(|| {
            format!("Imported {added} of {total} candidates. Some rows may have failed.")
        });
        Ok(ImportReport {
            added,
            total,
            message,
        })
    }

    /// Export the working set with the fixed four-column schema.
    pub fn export_csv(&self) -> String {
        csv::encode_candidates(&self.candidates)
    }
}
