//! Axum route handlers for the Assessment API.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::spawn_analysis;
use crate::assessment::form::AssessmentForm;
use crate::assessment::upload::{
    normalize_mime, sanitize_file_name, validate_resume_file, ResumeFile, UploadPolicy,
};
use crate::assessment::validation::validate_submission;
use crate::errors::AppError;
use crate::models::assessment::{AssessmentRow, AssessmentStatus, AssessmentType};
use crate::models::user::SessionUser;
use crate::scoring::{compute_score_snapshot, weight_table, ScoreSnapshot};
use crate::state::AppState;
use crate::store::{resume_key, StoredResume, SubmissionRecord};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentResponse {
    pub id: Uuid,
    pub assessment_type: AssessmentType,
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub assessment_id: Uuid,
    pub redirect_url: String,
    pub score: ScoreSnapshot,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentView {
    pub id: Uuid,
    pub assessment_type: String,
    pub title: Option<&'static str>,
    pub status: String,
    pub score: Option<Value>,
    pub resume_file_name: Option<String>,
    pub resume_analysis: Option<Value>,
    pub ai_processed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AssessmentRow> for AssessmentView {
    fn from(row: AssessmentRow) -> Self {
        Self {
            id: row.id,
            title: row.parsed_type().map(|t| t.title()),
            assessment_type: row.assessment_type,
            status: row.status,
            score: row.score_snapshot,
            resume_file_name: row.resume_file_name,
            resume_analysis: row.resume_analysis,
            ai_processed: row.ai_processed,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub status: &'static str,
}

/// Results page an assessment redirects to once submitted.
pub fn results_url(assessment_type: AssessmentType, id: Uuid) -> String {
    format!("/assessment/{}/results/{}", assessment_type.code(), id)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/assessment/:assessment_type
///
/// Creates an empty draft owned by the caller.
pub async fn handle_create(
    State(state): State<AppState>,
    user: SessionUser,
    Path(assessment_type): Path<String>,
) -> Result<(StatusCode, Json<CreateAssessmentResponse>), AppError> {
    let assessment_type = parse_type(&assessment_type)?;
    let row = state
        .store
        .create_assessment(user.user_id, assessment_type)
        .await
        .map_err(AppError::Internal)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAssessmentResponse {
            id: row.id,
            assessment_type,
            status: row.status,
        }),
    ))
}

/// GET /api/assessment/:assessment_type/:id
pub async fn handle_get(
    State(state): State<AppState>,
    user: SessionUser,
    Path((assessment_type, id)): Path<(String, Uuid)>,
) -> Result<Json<AssessmentView>, AppError> {
    let assessment_type = parse_type(&assessment_type)?;
    let row = load_accessible(&state, &user, assessment_type, id).await?;
    Ok(Json(row.into()))
}

/// POST /api/assessment/:assessment_type/:id/submit-with-google-vision
pub async fn handle_submit_vision(
    State(state): State<AppState>,
    user: SessionUser,
    Path((assessment_type, id)): Path<(String, Uuid)>,
    multipart: Multipart,
) -> Result<Json<SubmitResponse>, AppError> {
    submit(state, user, &assessment_type, id, multipart, UploadPolicy::Vision).await
}

/// POST /api/assessment/:assessment_type/:id/submit-with-file
pub async fn handle_submit_file(
    State(state): State<AppState>,
    user: SessionUser,
    Path((assessment_type, id)): Path<(String, Uuid)>,
    multipart: Multipart,
) -> Result<Json<SubmitResponse>, AppError> {
    submit(state, user, &assessment_type, id, multipart, UploadPolicy::Legacy).await
}

/// POST /api/assessment/:assessment_type/:id/analyze
///
/// Starts resume analysis for a submitted assessment that has not been processed,
/// e.g. after a `reset-ai` from the debug route.
pub async fn handle_analyze(
    State(state): State<AppState>,
    user: SessionUser,
    Path((assessment_type, id)): Path<(String, Uuid)>,
) -> Result<(StatusCode, Json<AnalyzeResponse>), AppError> {
    let assessment_type = parse_type(&assessment_type)?;
    let row = load_accessible(&state, &user, assessment_type, id).await?;

    if row.has_status(AssessmentStatus::Draft) {
        return Err(AppError::Conflict(format!("Assessment {id} has not been submitted")));
    }
    if row.ai_processed {
        return Err(AppError::Conflict(format!("Assessment {id} has already been analysed")));
    }
    if row.resume_key.is_none() {
        return Err(AppError::Validation("No resume attached to this assessment".to_string()));
    }

    spawn_analysis(state, id);
    Ok((StatusCode::ACCEPTED, Json(AnalyzeResponse { status: "analyzing" })))
}

// ────────────────────────────────────────────────────────────────────────────
// Submission pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Validate → score → store resume → persist → start analysis.
///
/// The score is always recomputed here from the answers; a client-sent snapshot
/// is only compared for logging.
async fn submit(
    state: AppState,
    user: SessionUser,
    assessment_type: &str,
    id: Uuid,
    multipart: Multipart,
    policy: UploadPolicy,
) -> Result<Json<SubmitResponse>, AppError> {
    let assessment_type = parse_type(assessment_type)?;
    let row = load_accessible(&state, &user, assessment_type, id).await?;
    if !row.has_status(AssessmentStatus::Draft) {
        return Err(AppError::Conflict(format!(
            "Assessment {id} has already been submitted"
        )));
    }

    let (form, resume) = read_submission(multipart, policy).await?;
    if let Some(file) = &resume {
        validate_resume_file(&file.mime, file.size(), policy)?;
    }
    validate_submission(&form, assessment_type, resume.is_some())?;

    let table = weight_table(assessment_type);
    let snapshot = compute_score_snapshot(table, &form.answers);
    let unscored = snapshot.unscored_categories();
    if !unscored.is_empty() {
        warn!("Assessment {id}: answers matched no statement in {unscored:?}");
    }
    if let Some(client_score) = form.client_final_score() {
        if client_score != u64::from(snapshot.estimated_final_score) {
            warn!(
                "Assessment {id}: client score {client_score} differs from server score {}",
                snapshot.estimated_final_score
            );
        }
    }

    let stored_resume = match &resume {
        Some(file) => Some(store_resume(&state, id, file).await?),
        None => None,
    };
    let has_resume = stored_resume.is_some();

    let record = SubmissionRecord {
        form_data: serde_json::to_value(form.without_snapshot())
            .map_err(|e| AppError::Internal(e.into()))?,
        snapshot: snapshot.clone(),
        resume: stored_resume,
    };
    persist_submission(&state, id, &record).await?;

    info!(
        "Assessment {id} ({assessment_type}) submitted via {}: {} / {}",
        policy.endpoint(),
        snapshot.estimated_final_score,
        snapshot.readiness_level
    );

    if has_resume {
        spawn_analysis(state, id);
    }

    Ok(Json(SubmitResponse {
        success: true,
        assessment_id: id,
        redirect_url: results_url(assessment_type, id),
        score: snapshot,
    }))
}

/// Reads the `formData` JSON field and the optional `resume` file field.
async fn read_submission(
    mut multipart: Multipart,
    policy: UploadPolicy,
) -> Result<(AssessmentForm, Option<ResumeFile>), AppError> {
    let mut form: Option<AssessmentForm> = None;
    let mut resume: Option<ResumeFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, policy))?
    {
        match field.name() {
            Some("formData") => {
                let text = field.text().await.map_err(|e| multipart_error(e, policy))?;
                let parsed = serde_json::from_str(&text)
                    .map_err(|e| AppError::Validation(format!("formData is not valid JSON: {e}")))?;
                form = Some(parsed);
            }
            Some("resume") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let mime = normalize_mime(field.content_type().unwrap_or_default());
                let bytes = field.bytes().await.map_err(|e| multipart_error(e, policy))?;
                // Browsers send a nameless empty part when no file was chosen.
                if !(bytes.is_empty() && file_name.is_empty()) {
                    resume = Some(ResumeFile::new(file_name, mime, bytes));
                }
            }
            _ => {}
        }
    }

    let form = form.ok_or_else(|| AppError::Validation("Missing formData field".to_string()))?;
    Ok((form, resume))
}

fn multipart_error(err: MultipartError, policy: UploadPolicy) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::Validation(format!(
            "File size exceeds {}MB limit",
            policy.max_megabytes()
        ))
    } else {
        AppError::Validation(format!("Malformed upload: {}", err.body_text()))
    }
}

/// Writes the submission if the assessment is still a draft. A submit that
/// loses the race gets 409 and its uploaded resume is removed.
async fn persist_submission(
    state: &AppState,
    id: Uuid,
    record: &SubmissionRecord,
) -> Result<AssessmentRow, AppError> {
    let result = state.store.record_submission(id, record).await;
    if !matches!(result, Ok(Some(_))) {
        if let Some(resume) = &record.resume {
            if let Err(e) = state.resumes.delete(&resume.key).await {
                warn!("Could not remove orphaned resume {}: {e}", resume.key);
            }
        }
    }

    match result {
        Ok(Some(row)) => Ok(row),
        Ok(None) => Err(AppError::Conflict(format!(
            "Assessment {id} has already been submitted"
        ))),
        Err(e) => Err(AppError::Internal(e)),
    }
}

async fn store_resume(state: &AppState, id: Uuid, file: &ResumeFile) -> Result<StoredResume, AppError> {
    let file_name = sanitize_file_name(&file.file_name);
    let key = resume_key(id, Uuid::new_v4(), &file_name);
    state
        .resumes
        .put(&key, file)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;
    Ok(StoredResume {
        key,
        file_name,
        mime: file.mime.clone(),
    })
}

fn parse_type(raw: &str) -> Result<AssessmentType, AppError> {
    raw.parse().map_err(AppError::NotFound)
}

/// Loads an assessment of the given type that the caller may act on.
async fn load_accessible(
    state: &AppState,
    user: &SessionUser,
    assessment_type: AssessmentType,
    id: Uuid,
) -> Result<AssessmentRow, AppError> {
    let row = state
        .store
        .get_assessment(id)
        .await
        .map_err(AppError::Internal)?
        .filter(|r| r.assessment_type == assessment_type.code())
        .ok_or_else(|| AppError::NotFound(format!("Assessment {id} not found")))?;

    if !user.can_access(row.user_id) {
        warn!("User {} denied access to assessment {id}", user.user_id);
        return Err(AppError::Forbidden);
    }
    Ok(row)
}
