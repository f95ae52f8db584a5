use serde::{Deserialize, Serialize};

/// Qualitative band for a final readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReadinessLevel {
    #[serde(rename = "Early Development")]
    EarlyDevelopment,
    #[serde(rename = "Basic Readiness")]
    Basic,
    #[serde(rename = "Developing Readiness")]
    Developing,
    #[serde(rename = "Moderate Readiness")]
    Moderate,
    #[serde(rename = "Strong Readiness")]
    Strong,
    #[serde(rename = "Exceptional Readiness")]
    Exceptional,
}

impl ReadinessLevel {
    /// Buckets a final score. Thresholds are inclusive lower bounds.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 85 => ReadinessLevel::Exceptional,
            s if s >= 75 => ReadinessLevel::Strong,
            s if s >= 65 => ReadinessLevel::Moderate,
            s if s >= 55 => ReadinessLevel::Developing,
            s if s >= 45 => ReadinessLevel::Basic,
            _ => ReadinessLevel::EarlyDevelopment,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadinessLevel::EarlyDevelopment => "Early Development",
            ReadinessLevel::Basic => "Basic Readiness",
            ReadinessLevel::Developing => "Developing Readiness",
            ReadinessLevel::Moderate => "Moderate Readiness",
            ReadinessLevel::Strong => "Strong Readiness",
            ReadinessLevel::Exceptional => "Exceptional Readiness",
        }
    }
}

impl std::fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
