use thiserror::Error;

use crate::assessment::form::{AssessmentForm, PERSONALITY_TAGS};
use crate::models::assessment::AssessmentType;
use crate::scoring::weight_table;

/// A user-facing reason a form cannot be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Submission gate. Returns the first failing check; nothing is partially accepted.
///
/// Order: personal details, personality traits (variants that ask for them),
/// one answer per section, resume (variants that require one).
pub fn validate_submission(
    form: &AssessmentForm,
    assessment_type: AssessmentType,
    has_resume: bool,
) -> Result<(), ValidationError> {
    if !form.personal_info.required_fields_present() {
        return Err(ValidationError::new(
            "Please fill in all required personal information",
        ));
    }

    if assessment_type.requires_personality_tags() {
        if form.personality_tags.is_empty() {
            return Err(ValidationError::new(
                "Please select at least one personality trait",
            ));
        }
        if let Some(unknown) = form
            .personality_tags
            .iter()
            .find(|t| !PERSONALITY_TAGS.contains(&t.as_str()))
        {
            return Err(ValidationError::new(format!(
                "Unknown personality trait: {unknown}"
            )));
        }
    }

    let table = weight_table(assessment_type);
    for category in table.categories {
        let answered = form
            .answers
            .get(category.key)
            .is_some_and(|a| !a.trim().is_empty());
        if !answered {
            return Err(ValidationError::new(format!(
                "Please answer the question in section: {}",
                category.label
            )));
        }
    }

    if assessment_type.resume_required() && !has_resume {
        return Err(ValidationError::new("Please upload your resume"));
    }

    Ok(())
}
