//! Weight tables: the fixed statement → weightage mapping for every assessment variant.
//!
//! Each variant has seven categories. Every category lists five statements, one per
//! weightage from 5 (strongest) down to 1. Tables are static data; nothing here is
//! derived at runtime.

mod ccrl;
mod cdrl;
mod ctrl;
mod fjrl;
mod ijrl;
mod ilrl;
mod rrl;

use crate::models::assessment::AssessmentType;

/// Highest weightage a single statement can carry.
pub const MAX_WEIGHT: u8 = 5;

/// One selectable statement and the points it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedOption {
    pub text: &'static str,
    pub weight: u8,
}

/// A questionnaire section. The user picks exactly one of its options.
#[derive(Debug)]
pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
    pub options: &'static [WeightedOption],
}

impl Category {
    /// Weight of the option whose text matches exactly, if any.
    pub fn weight_of(&self, selected: &str) -> Option<u8> {
        self.options
            .iter()
            .find(|o| o.text == selected)
            .map(|o| o.weight)
    }
}

#[derive(Debug)]
pub struct WeightTable {
    pub assessment_type: AssessmentType,
    pub categories: &'static [Category],
}

impl WeightTable {
    pub fn max_possible_score(&self) -> u32 {
        self.categories.len() as u32 * MAX_WEIGHT as u32
    }

    pub fn category(&self, key: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.key == key)
    }
}

const fn option(text: &'static str, weight: u8) -> WeightedOption {
    WeightedOption { text, weight }
}

pub fn weight_table(assessment_type: AssessmentType) -> &'static WeightTable {
    match assessment_type {
        AssessmentType::Ccrl => &ccrl::TABLE,
        AssessmentType::Cdrl => &cdrl::TABLE,
        AssessmentType::Ctrl => &ctrl::TABLE,
        AssessmentType::Fjrl => &fjrl::TABLE,
        AssessmentType::Ijrl => &ijrl::TABLE,
        AssessmentType::Ilrl => &ilrl::TABLE,
        AssessmentType::Rrl => &rrl::TABLE,
    }
}
