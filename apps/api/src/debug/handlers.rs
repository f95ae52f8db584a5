//! GET/POST /api/debug/assessments

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::assessment::form::AssessmentForm;
use crate::auth::DebugSession;
use crate::errors::AppError;
use crate::models::assessment::AssessmentRow;
use crate::models::user::SessionUser;
use crate::scoring::{compute_score_snapshot, weight_table, ScoreSnapshot};
use crate::state::AppState;

pub const RESET_AI_ACTION: &str = "reset-ai";

#[derive(Debug, Deserialize)]
pub struct DebugQuery {
    pub id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct DebugActionRequest {
    pub id: Uuid,
    pub action: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiFlags {
    pub ai_processed: bool,
    pub ai_processing_started_at: Option<DateTime<Utc>>,
    pub ai_processed_at: Option<DateTime<Utc>>,
    pub ai_error: Option<String>,
    pub has_analysis: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeInfo {
    pub key: String,
    pub file_name: Option<String>,
    pub mime: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugDetail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_type: String,
    pub status: String,
    pub final_score: Option<i32>,
    pub readiness_level: Option<String>,
    pub resume: Option<ResumeInfo>,
    pub ai: AiFlags,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AssessmentRow> for DebugDetail {
    fn from(row: AssessmentRow) -> Self {
        let resume = row.resume_key.map(|key| ResumeInfo {
            key,
            file_name: row.resume_file_name,
            mime: row.resume_mime,
        });
        Self {
            id: row.id,
            user_id: row.user_id,
            assessment_type: row.assessment_type,
            status: row.status,
            final_score: row.final_score,
            readiness_level: row.readiness_level,
            resume,
            ai: AiFlags {
                ai_processed: row.ai_processed,
                ai_processing_started_at: row.ai_processing_started_at,
                ai_processed_at: row.ai_processed_at,
                ai_error: row.ai_error,
                has_analysis: row.resume_analysis.is_some(),
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugListResponse {
    pub count: usize,
    pub is_admin: bool,
    pub assessments: Vec<DebugDetail>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DebugGetResponse {
    List(DebugListResponse),
    Detail(Box<DebugDetail>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugActionResponse {
    pub success: bool,
    pub message: String,
    pub assessment: DebugDetail,
}

/// GET /api/debug/assessments[?id=]
///
/// Without `id`: the caller's assessments (every assessment for admins).
/// With `id`: processing detail for one assessment.
pub async fn handle_debug_get(
    State(state): State<AppState>,
    DebugSession(user): DebugSession,
    Query(query): Query<DebugQuery>,
) -> Result<Json<DebugGetResponse>, AppError> {
    if let Some(id) = query.id {
        let row = load_for_debug(&state, &user, id).await?;
        return Ok(Json(DebugGetResponse::Detail(Box::new(row.into()))));
    }

    let owner = (!user.is_admin).then_some(user.user_id);
    let rows = state
        .store
        .list_assessments(owner)
        .await
        .map_err(|e| AppError::Diagnostic(e.to_string()))?;

    Ok(Json(DebugGetResponse::List(DebugListResponse {
        count: rows.len(),
        is_admin: user.is_admin,
        assessments: rows.into_iter().map(DebugDetail::from).collect(),
    })))
}

/// POST /api/debug/assessments  `{ "id": ..., "action": "reset-ai" }`
pub async fn handle_debug_post(
    State(state): State<AppState>,
    DebugSession(user): DebugSession,
    Json(request): Json<DebugActionRequest>,
) -> Result<Json<DebugActionResponse>, AppError> {
    if request.action != RESET_AI_ACTION {
        return Err(AppError::Validation(format!(
            "Unknown action '{}'",
            request.action
        )));
    }

    let row = load_for_debug(&state, &user, request.id).await?;
    let rescored = assumed_snapshot(&row);

    let reset = state
        .store
        .reset_analysis(row.id, rescored.as_ref())
        .await
        .map_err(|e| AppError::Diagnostic(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("Assessment {} not found", request.id)))?;

    info!("User {} reset AI flags on assessment {}", user.user_id, reset.id);

    Ok(Json(DebugActionResponse {
        success: true,
        message: "AI analysis flags reset".to_string(),
        assessment: reset.into(),
    }))
}

/// Score recomputed from the stored answers with the assumed resume score.
fn assumed_snapshot(row: &AssessmentRow) -> Option<ScoreSnapshot> {
    let assessment_type = row.parsed_type()?;
    let form: AssessmentForm = serde_json::from_value(row.form_data.clone()?).ok()?;
    Some(compute_score_snapshot(
        weight_table(assessment_type),
        &form.answers,
    ))
}

async fn load_for_debug(
    state: &AppState,
    user: &SessionUser,
    id: Uuid,
) -> Result<AssessmentRow, AppError> {
    let row = state
        .store
        .get_assessment(id)
        .await
        .map_err(|e| AppError::Diagnostic(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("Assessment {id} not found")))?;

    if !user.can_access(row.user_id) {
        return Err(AppError::Forbidden);
    }
    Ok(row)
}
