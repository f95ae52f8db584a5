use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use serde_json::Value;

/// Traits offered by the personality multi-select.
pub const PERSONALITY_TAGS: &[&str] = &[
    "Analytical",
    "Creative",
    "Detail-oriented",
    "Empathetic",
    "Independent",
    "Leader",
    "Organised",
    "Outgoing",
    "Patient",
    "Resilient",
    "Strategic",
    "Team player",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub age: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Age,
    Location,
}

impl PersonalInfo {
    pub fn set(&mut self, field: PersonalField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PersonalField::Name => self.name = value,
            PersonalField::Email => self.email = value,
            PersonalField::Phone => self.phone = value,
            PersonalField::Age => self.age = value,
            PersonalField::Location => {
                self.location = if value.trim().is_empty() {
                    None
                } else {
                    Some(value)
                }
            }
        }
    }

    /// True when every mandatory field has non-whitespace content.
    pub fn required_fields_present(&self) -> bool {
        [&self.name, &self.email, &self.phone, &self.age]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

/// Everything the user enters on a questionnaire.
///
/// `score_snapshot` is the client's own preview, kept as opaque JSON. The server
/// never scores from it and never rejects a form over its shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentForm {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub answers: HashMap<String, String>,
    #[serde(default)]
    pub personality_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_snapshot: Option<Value>,
}

impl AssessmentForm {
    /// `estimatedFinalScore` from the client's snapshot, if it sent a usable one.
    pub fn client_final_score(&self) -> Option<u64> {
        self.score_snapshot
            .as_ref()?
            .get("estimatedFinalScore")?
            .as_u64()
    }

    /// Copy of the form as it goes over the wire: answers only, no score snapshot.
    pub fn without_snapshot(&self) -> Self {
        Self {
            score_snapshot: None,
            ..self.clone()
        }
    }
}
