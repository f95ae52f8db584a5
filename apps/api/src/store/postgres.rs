use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::assessment::{AssessmentRow, AssessmentStatus, AssessmentType};
use crate::models::user::SessionUser;
use crate::scoring::ScoreSnapshot;
use crate::store::{AnalysisClaim, AnalysisOutcome, AssessmentStore, SubmissionRecord};

/// `AssessmentStore` backed by the `users`, `sessions` and `assessments` tables
/// (see `migrations/0001_init.sql`).
#[derive(Clone)]
pub struct PgAssessmentStore {
    pool: PgPool,
}

impl PgAssessmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentStore for PgAssessmentStore {
    async fn find_session(&self, token: &str) -> Result<Option<SessionUser>> {
        Ok(sqlx::query_as::<_, SessionUser>(
            r#"
            SELECT u.id AS user_id, u.email, u.is_admin
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token = $1 AND s.expires_at > NOW()
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn create_assessment(
        &self,
        user_id: Uuid,
        assessment_type: AssessmentType,
    ) -> Result<AssessmentRow> {
        let row = sqlx::query_as::<_, AssessmentRow>(
            r#"
            INSERT INTO assessments (id, user_id, assessment_type, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(assessment_type.code())
        .bind(AssessmentStatus::Draft.as_str())
        .fetch_one(&self.pool)
        .await?;

        info!("Created {} assessment {} for user {}", assessment_type, row.id, user_id);
        Ok(row)
    }

    async fn get_assessment(&self, id: Uuid) -> Result<Option<AssessmentRow>> {
        Ok(
            sqlx::query_as::<_, AssessmentRow>("SELECT * FROM assessments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn list_assessments(&self, owner: Option<Uuid>) -> Result<Vec<AssessmentRow>> {
        Ok(sqlx::query_as::<_, AssessmentRow>(
            r#"
            SELECT * FROM assessments
            WHERE $1::uuid IS NULL OR user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn record_submission(
        &self,
        id: Uuid,
        record: &SubmissionRecord,
    ) -> Result<Option<AssessmentRow>> {
        let snapshot_json = serde_json::to_value(&record.snapshot)?;
        let resume = record.resume.as_ref();

        let row = sqlx::query_as::<_, AssessmentRow>(
            r#"
            UPDATE assessments
            SET status = $2,
                form_data = $3,
                score_snapshot = $4,
                final_score = $5,
                readiness_level = $6,
                resume_key = $7,
                resume_file_name = $8,
                resume_mime = $9,
                updated_at = NOW()
            WHERE id = $1 AND status = $10
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(AssessmentStatus::Submitted.as_str())
        .bind(&record.form_data)
        .bind(snapshot_json)
        .bind(record.snapshot.estimated_final_score as i32)
        .bind(record.snapshot.readiness_level.label())
        .bind(resume.map(|r| r.key.as_str()))
        .bind(resume.map(|r| r.file_name.as_str()))
        .bind(resume.map(|r| r.mime.as_str()))
        .bind(AssessmentStatus::Draft.as_str())
        .fetch_optional(&self.pool)
        .await?;

        if row.is_some() {
            info!(
                "Recorded submission for assessment {id}: score {} ({})",
                record.snapshot.estimated_final_score, record.snapshot.readiness_level
            );
        }
        Ok(row)
    }

    async fn begin_analysis(&self, id: Uuid) -> Result<Option<AnalysisClaim>> {
        let started_at: Option<DateTime<Utc>> = sqlx::query_scalar(
            r#"
            UPDATE assessments
            SET status = $2, ai_processing_started_at = NOW(), ai_error = NULL, updated_at = NOW()
            WHERE id = $1 AND ai_processed = FALSE AND status IN ($3, $4)
            RETURNING ai_processing_started_at
            "#,
        )
        .bind(id)
        .bind(AssessmentStatus::Analyzing.as_str())
        .bind(AssessmentStatus::Submitted.as_str())
        .bind(AssessmentStatus::Failed.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(started_at.map(|started_at| AnalysisClaim {
            assessment_id: id,
            started_at,
        }))
    }

    async fn complete_analysis(
        &self,
        claim: &AnalysisClaim,
        outcome: &AnalysisOutcome,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE assessments
            SET status = $3,
                resume_analysis = $4,
                score_snapshot = $5,
                final_score = $6,
                readiness_level = $7,
                ai_processed = TRUE,
                ai_processed_at = NOW(),
                ai_error = NULL,
                updated_at = NOW()
            WHERE id = $1 AND status = $8 AND ai_processing_started_at = $2
            "#,
        )
        .bind(claim.assessment_id)
        .bind(claim.started_at)
        .bind(AssessmentStatus::Completed.as_str())
        .bind(&outcome.analysis)
        .bind(serde_json::to_value(&outcome.snapshot)?)
        .bind(outcome.snapshot.estimated_final_score as i32)
        .bind(outcome.snapshot.readiness_level.label())
        .bind(AssessmentStatus::Analyzing.as_str())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn fail_analysis(&self, claim: &AnalysisClaim, error: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE assessments
            SET status = $3, ai_error = $4, updated_at = NOW()
            WHERE id = $1 AND status = $5 AND ai_processing_started_at = $2
            "#,
        )
        .bind(claim.assessment_id)
        .bind(claim.started_at)
        .bind(AssessmentStatus::Failed.as_str())
        .bind(error)
        .bind(AssessmentStatus::Analyzing.as_str())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn reset_analysis(
        &self,
        id: Uuid,
        snapshot: Option<&ScoreSnapshot>,
    ) -> Result<Option<AssessmentRow>> {
        let snapshot_json = snapshot.map(serde_json::to_value).transpose()?;
        Ok(sqlx::query_as::<_, AssessmentRow>(
            r#"
            UPDATE assessments
            SET status = CASE WHEN status = $2 THEN status ELSE $3 END,
                ai_processed = FALSE,
                ai_processing_started_at = NULL,
                ai_processed_at = NULL,
                ai_error = NULL,
                resume_analysis = NULL,
                score_snapshot = COALESCE($4, score_snapshot),
                final_score = COALESCE($5, final_score),
                readiness_level = COALESCE($6, readiness_level),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(AssessmentStatus::Draft.as_str())
        .bind(AssessmentStatus::Submitted.as_str())
        .bind(snapshot_json)
        .bind(snapshot.map(|s| s.estimated_final_score as i32))
        .bind(snapshot.map(|s| s.readiness_level.label()))
        .fetch_optional(&self.pool)
        .await?)
    }
}
