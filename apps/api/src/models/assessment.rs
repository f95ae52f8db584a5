use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// The questionnaire variants offered by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentType {
    Ccrl,
    Cdrl,
    Ctrl,
    Fjrl,
    Ijrl,
    Ilrl,
    Rrl,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 7] = [
        AssessmentType::Ccrl,
        AssessmentType::Cdrl,
        AssessmentType::Ctrl,
        AssessmentType::Fjrl,
        AssessmentType::Ijrl,
        AssessmentType::Ilrl,
        AssessmentType::Rrl,
    ];

    /// Path segment and storage value.
    pub fn code(&self) -> &'static str {
        match self {
            AssessmentType::Ccrl => "ccrl",
            AssessmentType::Cdrl => "cdrl",
            AssessmentType::Ctrl => "ctrl",
            AssessmentType::Fjrl => "fjrl",
            AssessmentType::Ijrl => "ijrl",
            AssessmentType::Ilrl => "ilrl",
            AssessmentType::Rrl => "rrl",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AssessmentType::Ccrl => "Career Comeback Readiness Level",
            AssessmentType::Cdrl => "Career Development Readiness Level",
            AssessmentType::Ctrl => "Career Transition Readiness Level",
            AssessmentType::Fjrl => "First Job Readiness Level",
            AssessmentType::Ijrl => "Ideal Job Readiness Level",
            AssessmentType::Ilrl => "Internship Learning Readiness Level",
            AssessmentType::Rrl => "Retirement Readiness Level",
        }
    }

    /// Variants whose form includes the personality-trait multi-select.
    pub fn requires_personality_tags(&self) -> bool {
        matches!(
            self,
            AssessmentType::Ctrl | AssessmentType::Fjrl | AssessmentType::Ijrl | AssessmentType::Ilrl
        )
    }

    pub fn resume_required(&self) -> bool {
        !matches!(self, AssessmentType::Rrl)
    }
}

impl FromStr for AssessmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        AssessmentType::ALL
            .into_iter()
            .find(|t| t.code() == lower)
            .ok_or_else(|| format!("Unknown assessment type '{s}'"))
    }
}

impl std::fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Lifecycle of a stored assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Draft,
    Submitted,
    Analyzing,
    Completed,
    Failed,
}

impl AssessmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentStatus::Draft => "draft",
            AssessmentStatus::Submitted => "submitted",
            AssessmentStatus::Analyzing => "analyzing",
            AssessmentStatus::Completed => "completed",
            AssessmentStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_type: String,
    pub status: String,
    pub form_data: Option<Value>,
    pub score_snapshot: Option<Value>,
    pub final_score: Option<i32>,
    pub readiness_level: Option<String>,
    pub resume_key: Option<String>,
    pub resume_file_name: Option<String>,
    pub resume_mime: Option<String>,
    pub resume_analysis: Option<Value>,
    pub ai_processed: bool,
    pub ai_processing_started_at: Option<DateTime<Utc>>,
    pub ai_processed_at: Option<DateTime<Utc>>,
    pub ai_error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AssessmentRow {
    pub fn has_status(&self, status: AssessmentStatus) -> bool {
        self.status == status.as_str()
    }

    pub fn parsed_type(&self) -> Option<AssessmentType> {
        self.assessment_type.parse().ok()
    }
}
