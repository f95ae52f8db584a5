use super::{option, Category, WeightTable};
use crate::models::assessment::AssessmentType;

pub static TABLE: WeightTable = WeightTable {
    assessment_type: AssessmentType::Rrl,
    categories: &[
        Category {
            key: "financial_preparation",
            label: "Financial Preparation",
            options: &[
                option("My retirement income fully covers my planned lifestyle with a reserve", 5),
                option("My savings and pension cover most of my expected expenses", 4),
                option("I have savings but have not checked them against my needs", 3),
                option("I have limited savings set aside for retirement", 2),
                option("I have not started saving for retirement", 1),
            ],
        },
        Category {
            key: "health_planning",
            label: "Health Planning",
            options: &[
                option("I have comprehensive health cover and an active wellbeing routine", 5),
                option("I have health cover and look after myself reasonably well", 4),
                option("I have basic cover but no long-term health plan", 3),
                option("I am unsure how I will handle healthcare costs", 2),
                option("I have not considered healthcare in retirement", 1),
            ],
        },
        Category {
            key: "lifestyle_vision",
            label: "Lifestyle Vision",
            options: &[
                option("I have a detailed picture of how I will spend each week", 5),
                option("I know the main activities I want to pursue", 4),
                option("I have a few ideas about what I will do", 3),
                option("I have only vague thoughts about retired life", 2),
                option("I have not thought about life after work", 1),
            ],
        },
        Category {
            key: "social_connections",
            label: "Social Connections",
            options: &[
                option("I have a strong circle of friends and community outside work", 5),
                option("I have several close relationships outside work", 4),
                option("Most of my social life revolves around work", 3),
                option("I have few connections outside my job", 2),
                option("I expect to feel isolated after leaving work", 1),
            ],
        },
        Category {
            key: "purpose_activities",
            label: "Purpose & Meaningful Activities",
            options: &[
                option("I have volunteering, mentoring or part-time work lined up", 5),
                option("I have hobbies and causes I am eager to commit to", 4),
                option("I have interests I would like to develop further", 3),
                option("I am not sure what will give me purpose", 2),
                option("My sense of purpose comes entirely from my job", 1),
            ],
        },
        Category {
            key: "knowledge_transfer",
            label: "Knowledge Transfer",
            options: &[
                option("I have trained my successor and documented my responsibilities", 5),
                option("I have started handing over key responsibilities", 4),
                option("I have a handover plan but have not begun", 3),
                option("I have discussed succession only informally", 2),
                option("No one is prepared to take over my work", 1),
            ],
        },
        Category {
            key: "emotional_readiness",
            label: "Emotional Readiness",
            options: &[
                option("I am looking forward to retirement and feel fully at peace with it", 5),
                option("I feel mostly positive about this transition", 4),
                option("I have mixed feelings about leaving work", 3),
                option("I feel anxious about retiring", 2),
                option("I dread the thought of retiring", 1),
            ],
        },
    ],
};
