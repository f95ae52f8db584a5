//! Persistence seams. Handlers and the analysis worker only see these traits;
//! `AppState` carries `Arc<dyn AssessmentStore>` and `Arc<dyn ResumeStore>`.

pub mod postgres;
pub mod resumes;

#[cfg(test)]
pub mod memory;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::models::assessment::{AssessmentRow, AssessmentType};
use crate::models::user::SessionUser;
use crate::scoring::ScoreSnapshot;

pub use postgres::PgAssessmentStore;
pub use resumes::{resume_key, ResumeStore, S3ResumeStore};

/// Where a submitted resume was written.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredResume {
    pub key: String,
    pub file_name: String,
    pub mime: String,
}

/// Everything persisted when a draft is submitted.
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub form_data: Value,
    pub snapshot: ScoreSnapshot,
    pub resume: Option<StoredResume>,
}

/// Proof that one worker owns an analysis run. Writes with an outdated claim
/// are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisClaim {
    pub assessment_id: Uuid,
    pub started_at: DateTime<Utc>,
}

/// Result of a successful resume analysis.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub analysis: Value,
    pub snapshot: ScoreSnapshot,
}

#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Resolves an unexpired session token.
    async fn find_session(&self, token: &str) -> Result<Option<SessionUser>>;

    async fn create_assessment(
        &self,
        user_id: Uuid,
        assessment_type: AssessmentType,
    ) -> Result<AssessmentRow>;

    async fn get_assessment(&self, id: Uuid) -> Result<Option<AssessmentRow>>;

    /// Newest first. `owner = None` lists every user's assessments.
    async fn list_assessments(&self, owner: Option<Uuid>) -> Result<Vec<AssessmentRow>>;

    /// Moves a draft to `submitted`, storing the form and the authoritative score.
    /// Returns `None` when the assessment is no longer a draft.
    async fn record_submission(
        &self,
        id: Uuid,
        record: &SubmissionRecord,
    ) -> Result<Option<AssessmentRow>>;

    /// Marks analysis as running and returns the claim, or `None` if it is
    /// already running, already done, or not submitted.
    async fn begin_analysis(&self, id: Uuid) -> Result<Option<AnalysisClaim>>;

    /// Records a successful run. Returns false when the claim is stale, e.g. the
    /// AI flags were reset while the analyzer was working.
    async fn complete_analysis(&self, claim: &AnalysisClaim, outcome: &AnalysisOutcome)
        -> Result<bool>;

    /// Records a failed run. Returns false when the claim is stale.
    async fn fail_analysis(&self, claim: &AnalysisClaim, error: &str) -> Result<bool>;

    /// Clears AI flags and analysis so it can run again. `snapshot` replaces the
    /// stored score when given.
    async fn reset_analysis(
        &self,
        id: Uuid,
        snapshot: Option<&ScoreSnapshot>,
    ) -> Result<Option<AssessmentRow>>;
}
