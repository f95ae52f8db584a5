//! Shared fixtures for handler, worker and client tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::analysis::{AnalysisError, AnalysisRequest, ResumeAnalysis, ResumeAnalyzer};
use crate::assessment::form::{AssessmentForm, PersonalInfo};
use crate::models::assessment::AssessmentType;
use crate::scoring::weight_table;
use crate::state::AppState;
use crate::store::memory::{MemoryAssessmentStore, MemoryResumeStore};

/// Analyzer that returns a fixed score, or fails when `score` is `None`.
pub struct StubAnalyzer {
    pub score: Option<u32>,
    pub calls: Mutex<Vec<AnalysisRequest>>,
    /// When set, each call waits for one `notify_one` before answering.
    pub gate: Option<Arc<Notify>>,
}

impl StubAnalyzer {
    pub fn scoring(score: u32) -> Self {
        Self {
            score: Some(score),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn failing() -> Self {
        Self {
            score: None,
            ..Self::scoring(0)
        }
    }

    /// Like `scoring`/`failing`, but held mid-run until the returned gate is opened.
    pub fn gated(score: Option<u32>) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let analyzer = Self {
            score,
            gate: Some(gate.clone()),
            ..Self::scoring(0)
        };
        (analyzer, gate)
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ResumeAnalyzer for StubAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<ResumeAnalysis, AnalysisError> {
        self.calls.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match self.score {
            Some(resume_score) => Ok(ResumeAnalysis {
                resume_score,
                summary: "Clear, well structured resume.".to_string(),
                strengths: vec!["Quantified achievements".to_string()],
                improvements: vec![],
            }),
            None => Err(AnalysisError::NoText),
        }
    }
}

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<MemoryAssessmentStore>,
    pub resumes: Arc<MemoryResumeStore>,
    pub analyzer: Arc<StubAnalyzer>,
}

pub fn test_app(analyzer: StubAnalyzer) -> TestApp {
    let store = Arc::new(MemoryAssessmentStore::default());
    let resumes = Arc::new(MemoryResumeStore::default());
    let analyzer = Arc::new(analyzer);
    let state = AppState {
        store: store.clone(),
        resumes: resumes.clone(),
        analyzer: analyzer.clone(),
    };
    TestApp {
        state,
        store,
        resumes,
        analyzer,
    }
}

/// A form that passes validation, every section answered at `weight`.
pub fn complete_form(assessment_type: AssessmentType, weight: u8) -> AssessmentForm {
    let table = weight_table(assessment_type);
    AssessmentForm {
        personal_info: PersonalInfo {
            name: "Katherine Johnson".into(),
            email: "katherine@example.com".into(),
            phone: "555-0199".into(),
            age: "34".into(),
            location: Some("Hampton".into()),
        },
        answers: table
            .categories
            .iter()
            .map(|c| {
                let text = c
                    .options
                    .iter()
                    .find(|o| o.weight == weight)
                    .map(|o| o.text)
                    .unwrap_or_default();
                (c.key.to_string(), text.to_string())
            })
            .collect(),
        personality_tags: vec!["Analytical".into(), "Resilient".into()],
        score_snapshot: None,
    }
}

pub const BOUNDARY: &str = "readiness-test-boundary";

/// Multipart body with a `formData` JSON field and an optional `resume` file part.
pub fn multipart_body(form: &AssessmentForm, resume: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"formData\"\r\n\r\n{}\r\n",
            serde_json::to_string(form).unwrap()
        )
        .as_bytes(),
    );
    if let Some((file_name, mime, bytes)) = resume {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{file_name}\"\r\nContent-Type: {mime}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Sends one request through the router and returns status plus JSON body (Null if empty).
pub async fn send(
    router: axum::Router,
    request: axum::http::Request<axum::body::Body>,
) -> (axum::http::StatusCode, serde_json::Value) {
    use tower::ServiceExt;

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub fn authed(
    method: &str,
    uri: &str,
    token: &str,
) -> axum::http::request::Builder {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
}

/// Creates an assessment and records a submission for it directly in the store.
pub async fn submitted_assessment(
    app: &TestApp,
    user_id: uuid::Uuid,
    assessment_type: AssessmentType,
    weight: u8,
    with_resume: bool,
) -> uuid::Uuid {
    use crate::assessment::upload::ResumeFile;
    use crate::scoring::compute_score_snapshot;
    use crate::store::{resume_key, AssessmentStore, ResumeStore, StoredResume, SubmissionRecord};

    let row = app
        .store
        .create_assessment(user_id, assessment_type)
        .await
        .unwrap();
    let form = complete_form(assessment_type, weight);
    let resume = if with_resume {
        let key = resume_key(row.id, uuid::Uuid::new_v4(), "cv.pdf");
        let file = ResumeFile::new("cv.pdf", "application/pdf", b"%PDF-1.4".to_vec());
        app.resumes.put(&key, &file).await.unwrap();
        Some(StoredResume {
            key,
            file_name: "cv.pdf".into(),
            mime: "application/pdf".into(),
        })
    } else {
        None
    };
    let record = SubmissionRecord {
        form_data: serde_json::to_value(&form).unwrap(),
        snapshot: compute_score_snapshot(weight_table(assessment_type), &form.answers),
        resume,
    };
    app.store
        .record_submission(row.id, &record)
        .await
        .unwrap()
        .unwrap();
    row.id
}
