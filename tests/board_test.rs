use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use talentboard_backend::error::{Error, Result};
use talentboard_backend::models::candidate::Candidate;
use talentboard_backend::pipeline::board::{BoardSession, MoveOutcome, PipelineStore};
use talentboard_backend::pipeline::stage::Stage;

/// In-memory persistence collaborator. Failures are injected by candidate
/// name (inserts) or globally (stage updates); every call is appended to
/// `events` so tests can assert ordering.
#[derive(Default)]
struct InMemoryStore {
    rows: Mutex<Vec<Candidate>>,
    activities: Mutex<Vec<(Uuid, Option<Stage>, Stage)>>,
    events: Mutex<Vec<String>>,
    fail_inserts_named: HashSet<String>,
    fail_stage_updates: bool,
}

impl InMemoryStore {
    fn failing_inserts(names: &[&str]) -> Self {
        Self {
            fail_inserts_named: names.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl PipelineStore for InMemoryStore {
    async fn insert_candidate(
        &self,
        job_id: Uuid,
        name: String,
        linkedin_url: Option<String>,
        stage: Stage,
    ) -> Result<Candidate> {
        self.events.lock().unwrap().push(format!("insert:{name}"));
        if self.fail_inserts_named.contains(&name) {
            return Err(Error::Internal("insert rejected".into()));
        }
        let candidate = Candidate {
            id: Uuid::new_v4(),
            job_id,
            name,
            linkedin_url,
            stage: stage.as_str().to_string(),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(candidate.clone());
        Ok(candidate)
    }

    async fn update_stage(&self, candidate_id: Uuid, stage: Stage) -> Result<()> {
        self.events.lock().unwrap().push("update_stage".into());
        if self.fail_stage_updates {
            return Err(Error::Internal("stage update rejected".into()));
        }
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|c| c.id == candidate_id) {
            row.stage = stage.as_str().to_string();
        }
        Ok(())
    }

    async fn record_transition(
        &self,
        candidate_id: Uuid,
        _user_id: Uuid,
        from_stage: Option<Stage>,
        to_stage: Stage,
    ) -> Result<()> {
        self.events.lock().unwrap().push("record_transition".into());
        self.activities
            .lock()
            .unwrap()
            .push((candidate_id, from_stage, to_stage));
        Ok(())
    }
}

fn seeded(job_id: Uuid, name: &str, stage: Stage) -> Candidate {
    Candidate {
        id: Uuid::new_v4(),
        job_id,
        name: name.to_string(),
        linkedin_url: None,
        stage: stage.as_str().to_string(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn import_counts_partial_failure_without_aborting() {
    let store = InMemoryStore::failing_inserts(&["Bob"]);
    let job_id = Uuid::new_v4();
    let mut session = BoardSession::new(job_id, vec![]);

    let report = session
        .import_csv(&store, "name\r\nAlice\r\nBob\r\nCarol")
        .await
        .unwrap();

    assert_eq!(report.added, 2);
    assert_eq!(report.total, 3);
    assert_eq!(
        report.message.as_deref(),
        Some("Imported 2 of 3 candidates. Some rows may have failed.")
    );

    // The failed row neither aborted the batch nor rolled back earlier rows.
    let names: Vec<String> = session.candidates().iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, vec!["Alice", "Carol"]);
    assert_eq!(store.rows.lock().unwrap().len(), 2);
    assert_eq!(
        store.events(),
        vec!["insert:Alice", "insert:Bob", "insert:Carol"]
    );
}

#[tokio::test]
async fn import_is_silent_when_every_row_lands() {
    let store = InMemoryStore::default();
    let mut session = BoardSession::new(Uuid::new_v4(), vec![]);

    let report = session
        .import_csv(&store, "name,linkedin_url\r\nAda,https://x/ada")
        .await
        .unwrap();

    assert_eq!(report.added, 1);
    assert_eq!(report.total, 1);
    assert!(report.message.is_none());

    let rows = store.rows.lock().unwrap();
    assert_eq!(rows[0].name, "Ada");
    assert_eq!(rows[0].linkedin_url.as_deref(), Some("https://x/ada"));
    assert_eq!(rows[0].stage, "Applied");
}

#[tokio::test]
async fn import_of_empty_file_is_rejected_before_any_io() {
    let store = InMemoryStore::default();
    let mut session = BoardSession::new(Uuid::new_v4(), vec![]);

    let err = session.import_csv(&store, "\r\n   \r\n").await.unwrap_err();
    assert!(err.to_string().contains("CSV file is empty."));
    assert!(store.events().is_empty());
}

#[tokio::test]
async fn successful_move_records_activity_after_the_stage_update() {
    let job_id = Uuid::new_v4();
    let candidate = seeded(job_id, "Ada", Stage::Screening);
    let id = candidate.id;

    let store = InMemoryStore::default();
    store.rows.lock().unwrap().push(candidate.clone());

    let mut session = BoardSession::new(job_id, vec![candidate]);
    let outcome = session
        .move_candidate(&store, Uuid::new_v4(), id, Stage::Offer)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            from: Some(Stage::Screening),
            to: Stage::Offer,
        }
    );
    assert_eq!(session.candidates()[0].stage, "Offer");
    assert_eq!(store.events(), vec!["update_stage", "record_transition"]);

    let activities = store.activities.lock().unwrap();
    assert_eq!(
        activities.as_slice(),
        &[(id, Some(Stage::Screening), Stage::Offer)]
    );
}

#[tokio::test]
async fn failed_move_reverts_the_working_copy_and_logs_nothing() {
    let job_id = Uuid::new_v4();
    let candidate = seeded(job_id, "Ada", Stage::Screening);
    let id = candidate.id;

    let store = InMemoryStore {
        fail_stage_updates: true,
        ..InMemoryStore::default()
    };

    let mut session = BoardSession::new(job_id, vec![candidate]);
    let err = session
        .move_candidate(&store, Uuid::new_v4(), id, Stage::Offer)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("stage update rejected"));
    assert_eq!(session.candidates()[0].stage, "Screening");
    assert!(store.activities.lock().unwrap().is_empty());
}

#[tokio::test]
async fn exported_board_reimports_with_names_and_urls_intact() {
    let job_id = Uuid::new_v4();
    let mut exported = seeded(job_id, "Smith, John", Stage::Interview);
    exported.linkedin_url = Some("https://x/js".into());
    let session = BoardSession::new(job_id, vec![exported.clone()]);
    let csv = session.export_csv();

    let store = InMemoryStore::default();
    let mut fresh = BoardSession::new(Uuid::new_v4(), vec![]);
    let report = fresh.import_csv(&store, &csv).await.unwrap();

    assert_eq!(report.added, 1);
    let imported = &fresh.candidates()[0];
    assert_eq!(imported.name, exported.name);
    assert_eq!(imported.linkedin_url, exported.linkedin_url);
    // Imports always enter the pipeline at the initial stage.
    assert_eq!(imported.stage, "Applied");
}
