use std::sync::Arc;

use crate::analysis::ResumeAnalyzer;
use crate::store::{AssessmentStore, ResumeStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AssessmentStore>,
    pub resumes: Arc<dyn ResumeStore>,
    /// Pluggable resume analyzer. Default: LlmResumeAnalyzer.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
