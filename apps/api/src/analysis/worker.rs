use anyhow::{Context, Result};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::analysis::AnalysisRequest;
use crate::assessment::form::AssessmentForm;
use crate::models::assessment::AssessmentRow;
use crate::scoring::{compute_score_snapshot, weight_table};
use crate::state::AppState;
use crate::store::AnalysisOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRun {
    /// Already running, already processed, not submitted yet, or reset mid-run.
    Skipped,
    Completed { final_score: u32 },
    Failed { reason: String },
}

/// Runs analysis on a background task. Errors are logged, not returned.
pub fn spawn_analysis(state: AppState, assessment_id: Uuid) {
    tokio::spawn(async move {
        if let Err(e) = run_analysis(&state, assessment_id).await {
            error!("Resume analysis for {assessment_id} aborted: {e:?}");
        }
    });
}

/// Analyses the stored resume and re-blends the score.
///
/// Analysis failures are recorded on the assessment (`ai_error`, status `failed`)
/// and reported as `AnalysisRun::Failed`; only storage errors surface as `Err`.
pub async fn run_analysis(state: &AppState, assessment_id: Uuid) -> Result<AnalysisRun> {
    let Some(claim) = state.store.begin_analysis(assessment_id).await? else {
        info!("Skipping analysis for {assessment_id}: not claimable");
        return Ok(AnalysisRun::Skipped);
    };

    let row = state
        .store
        .get_assessment(assessment_id)
        .await?
        .with_context(|| format!("Assessment {assessment_id} vanished during analysis"))?;

    match analyze_row(state, &row).await {
        Ok(outcome) => {
            let final_score = outcome.snapshot.estimated_final_score;
            if !state.store.complete_analysis(&claim, &outcome).await? {
                warn!("Discarding analysis for {assessment_id}: claim was reset mid-run");
                return Ok(AnalysisRun::Skipped);
            }
            info!("Analysis complete for {assessment_id}: final score {final_score}");
            Ok(AnalysisRun::Completed { final_score })
        }
        Err(reason) => {
            warn!("Analysis failed for {assessment_id}: {reason}");
            if !state.store.fail_analysis(&claim, &reason).await? {
                warn!("Discarding failure for {assessment_id}: claim was reset mid-run");
                return Ok(AnalysisRun::Skipped);
            }
            Ok(AnalysisRun::Failed { reason })
        }
    }
}

async fn analyze_row(state: &AppState, row: &AssessmentRow) -> Result<AnalysisOutcome, String> {
    let assessment_type = row
        .parsed_type()
        .ok_or_else(|| format!("Unknown assessment type '{}'", row.assessment_type))?;
    let (key, mime) = match (&row.resume_key, &row.resume_mime) {
        (Some(key), Some(mime)) => (key, mime),
        _ => return Err("No resume attached".to_string()),
    };
    let form = row
        .form_data
        .clone()
        .map(serde_json::from_value::<AssessmentForm>)
        .transpose()
        .map_err(|e| format!("Stored form data is unreadable: {e}"))?
        .ok_or_else(|| "Assessment has no submitted form".to_string())?;

    let bytes = state
        .resumes
        .get(key)
        .await
        .map_err(|e| format!("Could not load resume: {e}"))?;

    let request = AnalysisRequest {
        assessment_type,
        mime: mime.clone(),
        bytes,
    };
    let analysis = state
        .analyzer
        .analyze(&request)
        .await
        .map_err(|e| e.to_string())?;

    let snapshot = compute_score_snapshot(weight_table(assessment_type), &form.answers)
        .with_resume_score(analysis.resume_score);
    let analysis = serde_json::to_value(&analysis).map_err(|e| e.to_string())?;

    Ok(AnalysisOutcome { analysis, snapshot })
}
