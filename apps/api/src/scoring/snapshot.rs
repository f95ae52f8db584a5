use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::scoring::readiness::ReadinessLevel;
use crate::scoring::tables::WeightTable;

/// Share of the final score carried by the questionnaire.
pub const FORM_WEIGHT: f64 = 0.6;
/// Share of the final score carried by the resume.
pub const RESUME_WEIGHT: f64 = 0.4;
/// Resume score assumed until real resume analysis is available.
pub const ASSUMED_RESUME_SCORE: u32 = 70;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWeight {
    pub category: String,
    /// 0 when the category is unanswered or the answer matches no statement.
    pub weight: u8,
}

/// Derived scoring state for one set of answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    pub category_weights: Vec<CategoryWeight>,
    pub raw_total_score: u32,
    pub max_possible_score: u32,
    pub form_percentage: u32,
    pub form_contribution: u32,
    pub resume_score: u32,
    pub resume_contribution: u32,
    pub estimated_final_score: u32,
    pub readiness_level: ReadinessLevel,
}

/// Scores a set of answers against a weight table.
///
/// Unanswered or unrecognised answers contribute 0 without failing.
pub fn compute_score_snapshot(
    table: &WeightTable,
    answers: &HashMap<String, String>,
) -> ScoreSnapshot {
    let category_weights: Vec<CategoryWeight> = table
        .categories
        .iter()
        .map(|category| {
            let weight = answers
                .get(category.key)
                .and_then(|selected| category.weight_of(selected))
                .unwrap_or(0);
            CategoryWeight {
                category: category.key.to_string(),
                weight,
            }
        })
        .collect();

    let raw_total_score: u32 = category_weights.iter().map(|c| c.weight as u32).sum();
    let max_possible_score = table.max_possible_score();
    let form_percentage = if max_possible_score > 0 {
        round_half_up(raw_total_score as f64 / max_possible_score as f64 * 100.0)
    } else {
        0
    };
    let form_contribution = round_half_up(form_percentage as f64 * FORM_WEIGHT);

    let mut snapshot = ScoreSnapshot {
        category_weights,
        raw_total_score,
        max_possible_score,
        form_percentage,
        form_contribution,
        resume_score: 0,
        resume_contribution: 0,
        estimated_final_score: 0,
        readiness_level: ReadinessLevel::EarlyDevelopment,
    };
    snapshot.apply_resume_score(ASSUMED_RESUME_SCORE);
    snapshot
}

impl ScoreSnapshot {
    /// Replaces the assumed resume score with an analysed one (clamped to 0..=100).
    pub fn with_resume_score(mut self, resume_score: u32) -> Self {
        self.apply_resume_score(resume_score.min(100));
        self
    }

    /// Category keys whose answer scored nothing.
    pub fn unscored_categories(&self) -> Vec<&str> {
        self.category_weights
            .iter()
            .filter(|c| c.weight == 0)
            .map(|c| c.category.as_str())
            .collect()
    }

    fn apply_resume_score(&mut self, resume_score: u32) {
        self.resume_score = resume_score;
        self.resume_contribution = round_half_up(resume_score as f64 * RESUME_WEIGHT);
        self.estimated_final_score = self.form_contribution + self.resume_contribution;
        self.readiness_level = ReadinessLevel::from_score(self.estimated_final_score);
    }
}

fn round_half_up(value: f64) -> u32 {
    value.max(0.0).round() as u32
}
