use super::{option, Category, WeightTable};
use crate::models::assessment::AssessmentType;

pub static TABLE: WeightTable = WeightTable {
    assessment_type: AssessmentType::Ccrl,
    categories: &[
        Category {
            key: "gap_explanation",
            label: "Career Gap Narrative",
            options: &[
                option("I can explain my career break confidently and link it to my strengths", 5),
                option("I have a clear, honest explanation for my break", 4),
                option("I can explain my break but feel unsure doing so", 3),
                option("I am worried about how employers will see my break", 2),
                option("I avoid talking about my career break", 1),
            ],
        },
        Category {
            key: "skill_currency",
            label: "Skill Currency",
            options: &[
                option("I have fully refreshed my skills to current industry standards", 5),
                option("I have updated most of my key skills", 4),
                option("I have started refreshing my skills", 3),
                option("My skills are somewhat outdated", 2),
                option("My skills are significantly out of date", 1),
            ],
        },
        Category {
            key: "confidence",
            label: "Professional Confidence",
            options: &[
                option("I feel ready and confident to return to work now", 5),
                option("I feel mostly confident about returning", 4),
                option("My confidence varies from day to day", 3),
                option("I have significant doubts about returning", 2),
                option("I feel very unsure about going back to work", 1),
            ],
        },
        Category {
            key: "support_system",
            label: "Support System",
            options: &[
                option("My personal arrangements are fully in place to support my return", 5),
                option("I have most of the support I need arranged", 4),
                option("I have partial support and am working on the rest", 3),
                option("I have limited support for returning to work", 2),
                option("I have no support arrangements in place", 1),
            ],
        },
        Category {
            key: "flexibility",
            label: "Flexibility & Expectations",
            options: &[
                option("I am open to different roles, schedules and entry points", 5),
                option("I am flexible on most terms of my return", 4),
                option("I am flexible on some terms but have firm limits", 3),
                option("I am only willing to return to my previous role", 2),
                option("I have rigid expectations that limit my options", 1),
            ],
        },
        Category {
            key: "industry_reconnection",
            label: "Industry Reconnection",
            options: &[
                option("I have reconnected with former colleagues and attend industry events", 5),
                option("I have reached out to several contacts in my field", 4),
                option("I follow industry news but have not reached out", 3),
                option("I have lost touch with most of my industry", 2),
                option("I have no current connection to my industry", 1),
            ],
        },
        Category {
            key: "learning_commitment",
            label: "Learning Commitment",
            options: &[
                option("I am enrolled in a returner programme or structured course", 5),
                option("I dedicate regular weekly time to learning", 4),
                option("I learn when I find the time", 3),
                option("I intend to learn once I am back at work", 2),
                option("I do not plan any further learning", 1),
            ],
        },
    ],
};
