use thiserror::Error;

use crate::assessment::form::{AssessmentForm, PersonalField};
use crate::assessment::upload::{validate_resume_file, ResumeFile, UploadPolicy};
use crate::assessment::validation::{validate_submission, ValidationError};
use crate::models::assessment::AssessmentType;
use crate::scoring::{compute_score_snapshot, weight_table, ScoreSnapshot};

/// Where the user is in the fill-in / review / send flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Form,
    Preview,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("cannot {action} from the {step:?} step")]
    WrongStep { action: &'static str, step: Step },
}

/// What `begin_submit` hands to the transport.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub form: AssessmentForm,
    pub resume: Option<ResumeFile>,
}

/// Local state for one questionnaire.
///
/// The score snapshot is recomputed on every edit, so the preview always
/// reflects the current answers.
#[derive(Debug, Clone)]
pub struct FormSession {
    assessment_type: AssessmentType,
    policy: UploadPolicy,
    form: AssessmentForm,
    snapshot: ScoreSnapshot,
    resume: Option<ResumeFile>,
    step: Step,
    error: Option<String>,
}

impl FormSession {
    pub fn new(assessment_type: AssessmentType, policy: UploadPolicy) -> Self {
        let form = AssessmentForm::default();
        let snapshot = compute_score_snapshot(weight_table(assessment_type), &form.answers);
        Self {
            assessment_type,
            policy,
            form,
            snapshot,
            resume: None,
            step: Step::Form,
            error: None,
        }
    }

    pub fn assessment_type(&self) -> AssessmentType {
        self.assessment_type
    }

    pub fn policy(&self) -> UploadPolicy {
        self.policy
    }

    pub fn form(&self) -> &AssessmentForm {
        &self.form
    }

    pub fn snapshot(&self) -> &ScoreSnapshot {
        &self.snapshot
    }

    pub fn resume(&self) -> Option<&ResumeFile> {
        self.resume.as_ref()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_answer(&mut self, category: &str, statement: impl Into<String>) {
        self.form
            .answers
            .insert(category.to_string(), statement.into());
        self.rescore();
    }

    pub fn set_personal_field(&mut self, field: PersonalField, value: impl Into<String>) {
        self.form.personal_info.set(field, value);
        self.rescore();
    }

    /// Adds the tag if absent, removes it if present.
    pub fn toggle_personality_tag(&mut self, tag: &str) {
        let tags = &mut self.form.personality_tags;
        match tags.iter().position(|t| t == tag) {
            Some(index) => {
                tags.remove(index);
            }
            None => tags.push(tag.to_string()),
        }
        self.rescore();
    }

    /// Accepts a resume if its type and size pass. A rejected file leaves the
    /// previous selection in place.
    pub fn select_file(&mut self, file: ResumeFile) -> Result<(), SessionError> {
        if let Err(err) = validate_resume_file(&file.mime, file.size(), self.policy) {
            self.error = Some(err.message().to_string());
            return Err(err.into());
        }
        self.resume = Some(file);
        self.error = None;
        Ok(())
    }

    pub fn clear_file(&mut self) {
        self.resume = None;
    }

    /// Runs the submission gate and moves to the preview step.
    pub fn preview(&mut self) -> Result<(), SessionError> {
        self.expect_step(Step::Form, "preview")?;
        if let Err(err) = validate_submission(&self.form, self.assessment_type, self.resume.is_some()) {
            self.error = Some(err.message().to_string());
            return Err(err.into());
        }
        self.step = Step::Preview;
        self.error = None;
        Ok(())
    }

    pub fn back_to_form(&mut self) -> Result<(), SessionError> {
        self.expect_step(Step::Preview, "return to the form")?;
        self.step = Step::Form;
        Ok(())
    }

    /// Locks the session while the request is in flight and returns what to send.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SessionError> {
        self.expect_step(Step::Preview, "submit")?;
        self.step = Step::Submitting;
        self.error = None;
        Ok(PendingSubmission {
            form: self.form.without_snapshot(),
            resume: self.resume.clone(),
        })
    }

    /// Back to the preview with the failure shown, so the user can retry.
    pub fn submission_failed(&mut self, message: impl Into<String>) -> Result<(), SessionError> {
        self.expect_step(Step::Submitting, "report a failed submission")?;
        self.step = Step::Preview;
        self.error = Some(message.into());
        Ok(())
    }

    fn expect_step(&self, expected: Step, action: &'static str) -> Result<(), SessionError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(SessionError::WrongStep {
                action,
                step: self.step,
            })
        }
    }

    fn rescore(&mut self) {
        self.snapshot = compute_score_snapshot(weight_table(self.assessment_type), &self.form.answers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::complete_form;

    fn filled(assessment_type: AssessmentType, weight: u8) -> FormSession {
        let mut session = FormSession::new(assessment_type, UploadPolicy::Vision);
        let form = complete_form(assessment_type, weight);
        let info = &form.personal_info;
        session.set_personal_field(PersonalField::Name, info.name.clone());
        session.set_personal_field(PersonalField::Email, info.email.clone());
        session.set_personal_field(PersonalField::Phone, info.phone.clone());
        session.set_personal_field(PersonalField::Age, info.age.clone());
        for (category, statement) in &form.answers {
            session.set_answer(category, statement.clone());
        }
        for tag in &form.personality_tags {
            session.toggle_personality_tag(tag);
        }
        session
    }

    fn pdf() -> ResumeFile {
        ResumeFile::new("cv.pdf", "application/pdf", b"%PDF-1.4".to_vec())
    }

    #[test]
    fn test_snapshot_tracks_every_answer() {
        let mut session = FormSession::new(AssessmentType::Cdrl, UploadPolicy::Vision);
        assert_eq!(session.snapshot().raw_total_score, 0);
        assert_eq!(session.snapshot().estimated_final_score, 28);

        let category = &weight_table(AssessmentType::Cdrl).categories[0];
        let top = category.options.iter().find(|o| o.weight == 5).unwrap();
        session.set_answer(category.key, top.text);
        assert_eq!(session.snapshot().raw_total_score, 5);

        let bottom = category.options.iter().find(|o| o.weight == 1).unwrap();
        session.set_answer(category.key, bottom.text);
        assert_eq!(session.snapshot().raw_total_score, 1);
    }

    #[test]
    fn test_toggle_personality_tag() {
        let mut session = FormSession::new(AssessmentType::Fjrl, UploadPolicy::Vision);
        session.toggle_personality_tag("Creative");
        session.toggle_personality_tag("Patient");
        session.toggle_personality_tag("Creative");
        assert_eq!(session.form().personality_tags, vec!["Patient".to_string()]);
    }

    #[test]
    fn test_rejected_file_keeps_previous_selection() {
        let mut session = FormSession::new(AssessmentType::Cdrl, UploadPolicy::Legacy);
        session.select_file(pdf()).unwrap();

        let too_big = ResumeFile::new("big.pdf", "application/pdf", vec![0u8; 6 * 1024 * 1024]);
        let err = session.select_file(too_big).unwrap_err();
        assert_eq!(err.to_string(), "File size exceeds 5MB limit");
        assert_eq!(session.error(), Some("File size exceeds 5MB limit"));
        assert_eq!(session.resume().unwrap().file_name, "cv.pdf");

        let zip = ResumeFile::new("cv.zip", "application/zip", b"PK".to_vec());
        assert!(session.select_file(zip).is_err());
        assert_eq!(session.resume().unwrap().file_name, "cv.pdf");

        session.select_file(pdf()).unwrap();
        assert!(session.error().is_none());
    }

    #[test]
    fn test_preview_gate_keeps_user_on_form() {
        let mut session = filled(AssessmentType::Cdrl, 4);
        let err = session.preview().unwrap_err();
        assert_eq!(err.to_string(), "Please upload your resume");
        assert_eq!(session.step(), Step::Form);
        assert_eq!(session.error(), Some("Please upload your resume"));

        session.select_file(pdf()).unwrap();
        session.preview().unwrap();
        assert_eq!(session.step(), Step::Preview);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_full_flow_with_failed_then_retried_submit() {
        let mut session = filled(AssessmentType::Ijrl, 5);
        session.select_file(pdf()).unwrap();
        session.preview().unwrap();
        session.back_to_form().unwrap();
        session.preview().unwrap();

        let pending = session.begin_submit().unwrap();
        assert_eq!(session.step(), Step::Submitting);
        assert!(pending.form.score_snapshot.is_none());
        assert_eq!(pending.resume.unwrap().file_name, "cv.pdf");
        assert!(matches!(
            session.begin_submit(),
            Err(SessionError::WrongStep { step: Step::Submitting, .. })
        ));

        session.submission_failed("Network unavailable").unwrap();
        assert_eq!(session.step(), Step::Preview);
        assert_eq!(session.error(), Some("Network unavailable"));

        session.begin_submit().unwrap();
        assert_eq!(session.snapshot().estimated_final_score, 88);
    }

    #[test]
    fn test_steps_cannot_be_skipped() {
        let mut session = filled(AssessmentType::Rrl, 3);
        assert!(session.begin_submit().is_err());
        assert!(session.back_to_form().is_err());
        assert!(session.submission_failed("boom").is_err());
        assert_eq!(session.step(), Step::Form);
    }
}
