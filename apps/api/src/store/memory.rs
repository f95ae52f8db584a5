//! In-memory store fakes for handler and client tests.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use uuid::Uuid;

use crate::assessment::upload::ResumeFile;
use crate::models::assessment::{AssessmentRow, AssessmentStatus, AssessmentType};
use crate::models::user::SessionUser;
use crate::scoring::ScoreSnapshot;
use crate::store::{AnalysisClaim, AnalysisOutcome, AssessmentStore, ResumeStore, SubmissionRecord};

#[derive(Default)]
pub struct MemoryAssessmentStore {
    sessions: Mutex<HashMap<String, SessionUser>>,
    assessments: Mutex<HashMap<Uuid, AssessmentRow>>,
    session_failure: Mutex<Option<String>>,
}

impl MemoryAssessmentStore {
    /// Registers a session token and returns the user it resolves to.
    pub fn add_session(&self, token: &str, is_admin: bool) -> SessionUser {
        let user = SessionUser {
            user_id: Uuid::new_v4(),
            email: format!("{token}@example.com"),
            is_admin,
        };
        self.sessions
            .lock()
            .unwrap()
            .insert(token.to_string(), user.clone());
        user
    }

    /// Makes every later `find_session` fail with `message`.
    pub fn fail_session_lookups(&self, message: &str) {
        *self.session_failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn snapshot_of(&self, id: Uuid) -> Option<AssessmentRow> {
        self.assessments.lock().unwrap().get(&id).cloned()
    }

    fn update<F>(&self, id: Uuid, f: F) -> Result<AssessmentRow>
    where
        F: FnOnce(&mut AssessmentRow),
    {
        let mut map = self.assessments.lock().unwrap();
        let row = map
            .get_mut(&id)
            .ok_or_else(|| anyhow!("assessment {id} not found"))?;
        f(row);
        row.updated_at = Utc::now();
        Ok(row.clone())
    }
}

impl MemoryAssessmentStore {
    /// Applies `f` only if the row is still analysing under `claim`.
    fn update_claimed<F>(&self, claim: &AnalysisClaim, f: F) -> bool
    where
        F: FnOnce(&mut AssessmentRow),
    {
        let mut map = self.assessments.lock().unwrap();
        let Some(row) = map.get_mut(&claim.assessment_id).filter(|r| {
            r.has_status(AssessmentStatus::Analyzing)
                && r.ai_processing_started_at == Some(claim.started_at)
        }) else {
            return false;
        };
        f(row);
        row.updated_at = Utc::now();
        true
    }
}

fn apply_snapshot(row: &mut AssessmentRow, snapshot: &ScoreSnapshot) {
    row.score_snapshot = serde_json::to_value(snapshot).ok();
    row.final_score = Some(snapshot.estimated_final_score as i32);
    row.readiness_level = Some(snapshot.readiness_level.label().to_string());
}

#[async_trait]
impl AssessmentStore for MemoryAssessmentStore {
    async fn find_session(&self, token: &str) -> Result<Option<SessionUser>> {
        if let Some(message) = self.session_failure.lock().unwrap().clone() {
            return Err(anyhow!(message));
        }
        Ok(self.sessions.lock().unwrap().get(token).cloned())
    }

    async fn create_assessment(
        &self,
        user_id: Uuid,
        assessment_type: AssessmentType,
    ) -> Result<AssessmentRow> {
        let now = Utc::now();
        let row = AssessmentRow {
            id: Uuid::new_v4(),
            user_id,
            assessment_type: assessment_type.code().to_string(),
            status: AssessmentStatus::Draft.as_str().to_string(),
            form_data: None,
            score_snapshot: None,
            final_score: None,
            readiness_level: None,
            resume_key: None,
            resume_file_name: None,
            resume_mime: None,
            resume_analysis: None,
            ai_processed: false,
            ai_processing_started_at: None,
            ai_processed_at: None,
            ai_error: None,
            created_at: now,
            updated_at: now,
        };
        self.assessments
            .lock()
            .unwrap()
            .insert(row.id, row.clone());
        Ok(row)
    }

    async fn get_assessment(&self, id: Uuid) -> Result<Option<AssessmentRow>> {
        Ok(self.snapshot_of(id))
    }

    async fn list_assessments(&self, owner: Option<Uuid>) -> Result<Vec<AssessmentRow>> {
        let mut rows: Vec<_> = self
            .assessments
            .lock()
            .unwrap()
            .values()
            .filter(|r| owner.map_or(true, |o| r.user_id == o))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn record_submission(
        &self,
        id: Uuid,
        record: &SubmissionRecord,
    ) -> Result<Option<AssessmentRow>> {
        let mut map = self.assessments.lock().unwrap();
        let Some(row) = map
            .get_mut(&id)
            .filter(|r| r.has_status(AssessmentStatus::Draft))
        else {
            return Ok(None);
        };
        row.status = AssessmentStatus::Submitted.as_str().to_string();
        row.form_data = Some(record.form_data.clone());
        apply_snapshot(row, &record.snapshot);
        if let Some(resume) = &record.resume {
            row.resume_key = Some(resume.key.clone());
            row.resume_file_name = Some(resume.file_name.clone());
            row.resume_mime = Some(resume.mime.clone());
        }
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn begin_analysis(&self, id: Uuid) -> Result<Option<AnalysisClaim>> {
        let mut map = self.assessments.lock().unwrap();
        let Some(row) = map.get_mut(&id) else {
            return Ok(None);
        };
        let claimable = !row.ai_processed
            && (row.has_status(AssessmentStatus::Submitted) || row.has_status(AssessmentStatus::Failed));
        if !claimable {
            return Ok(None);
        }
        let started_at = Utc::now();
        row.status = AssessmentStatus::Analyzing.as_str().to_string();
        row.ai_processing_started_at = Some(started_at);
        row.ai_error = None;
        Ok(Some(AnalysisClaim {
            assessment_id: id,
            started_at,
        }))
    }

    async fn complete_analysis(
        &self,
        claim: &AnalysisClaim,
        outcome: &AnalysisOutcome,
    ) -> Result<bool> {
        Ok(self.update_claimed(claim, |row| {
            row.status = AssessmentStatus::Completed.as_str().to_string();
            row.resume_analysis = Some(outcome.analysis.clone());
            apply_snapshot(row, &outcome.snapshot);
            row.ai_processed = true;
            row.ai_processed_at = Some(Utc::now());
            row.ai_error = None;
        }))
    }

    async fn fail_analysis(&self, claim: &AnalysisClaim, error: &str) -> Result<bool> {
        Ok(self.update_claimed(claim, |row| {
            row.status = AssessmentStatus::Failed.as_str().to_string();
            row.ai_error = Some(error.to_string());
        }))
    }

    async fn reset_analysis(
        &self,
        id: Uuid,
        snapshot: Option<&ScoreSnapshot>,
    ) -> Result<Option<AssessmentRow>> {
        if self.snapshot_of(id).is_none() {
            return Ok(None);
        }
        self.update(id, |row| {
            if !row.has_status(AssessmentStatus::Draft) {
                row.status = AssessmentStatus::Submitted.as_str().to_string();
            }
            row.ai_processed = false;
            row.ai_processing_started_at = None;
            row.ai_processed_at = None;
            row.ai_error = None;
            row.resume_analysis = None;
            if let Some(snapshot) = snapshot {
                apply_snapshot(row, snapshot);
            }
        })
        .map(Some)
    }
}

#[derive(Default)]
pub struct MemoryResumeStore {
    objects: Mutex<HashMap<String, ResumeFile>>,
}

impl MemoryResumeStore {
    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn put(&self, key: &str, file: &ResumeFile) -> Result<()> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), file.clone());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Bytes> {
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .map(|f| f.bytes.clone())
            .ok_or_else(|| anyhow!("no object at {key}"))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }
}
