//! Resume analysis: turns an uploaded resume into a 0-100 resume score that
//! replaces the assumed score in the readiness blend.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`; production uses `LlmResumeAnalyzer`.

pub mod extract;
pub mod prompts;
pub mod worker;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::analysis::extract::extract_resume_text;
use crate::analysis::prompts::{RESUME_ANALYSIS_PROMPT, RESUME_ANALYSIS_SYSTEM};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::assessment::AssessmentType;

pub use worker::{run_analysis, spawn_analysis, AnalysisRun};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Resume format {0} has no extractable text")]
    UnsupportedFormat(String),

    #[error("Could not read resume: {0}")]
    Extraction(String),

    #[error("Resume contains no readable text")]
    NoText,

    #[error("Resume analysis failed: {0}")]
    Llm(#[from] LlmError),
}

/// Input for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub assessment_type: AssessmentType,
    pub mime: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub resume_score: u32,
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<ResumeAnalysis, AnalysisError>;
}

/// Scores resumes with the LLM after extracting their text.
pub struct LlmResumeAnalyzer {
    llm: LlmClient,
}

impl LlmResumeAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeAnalyzer for LlmResumeAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<ResumeAnalysis, AnalysisError> {
        let mime = request.mime.clone();
        let bytes = request.bytes.clone();
        // PDF parsing is CPU-bound and may panic on malformed input.
        let text = tokio::task::spawn_blocking(move || extract_resume_text(&mime, &bytes))
            .await
            .map_err(|e| AnalysisError::Extraction(e.to_string()))??;

        info!(
            "Analysing {} resume ({} chars of text)",
            request.assessment_type,
            text.chars().count()
        );

        let prompt = build_prompt(request.assessment_type, &text);
        let system = format!("{RESUME_ANALYSIS_SYSTEM} {JSON_ONLY_SYSTEM}");
        let analysis: ResumeAnalysis = self.llm.call_json(&prompt, &system).await?;
        Ok(analysis.clamped())
    }
}

impl ResumeAnalysis {
    fn clamped(mut self) -> Self {
        self.resume_score = self.resume_score.min(100);
        self
    }
}

fn build_prompt(assessment_type: AssessmentType, resume_text: &str) -> String {
    RESUME_ANALYSIS_PROMPT
        .replace("{assessment_title}", assessment_type.title())
        .replace("{resume_text}", resume_text)
}
