use super::{option, Category, WeightTable};
use crate::models::assessment::AssessmentType;

pub static TABLE: WeightTable = WeightTable {
    assessment_type: AssessmentType::Ctrl,
    categories: &[
        Category {
            key: "transition_motivation",
            label: "Transition Motivation",
            options: &[
                option("I am moving towards a specific career I have researched and validated", 5),
                option("I have strong, well-considered reasons for changing careers", 4),
                option("I want a change and have a direction in mind", 3),
                option("I mainly want to get away from my current job", 2),
                option("I am not sure why I want to change", 1),
            ],
        },
        Category {
            key: "transferable_skills",
            label: "Transferable Skills",
            options: &[
                option("I have mapped my skills to the new field and can evidence each one", 5),
                option("I know which of my skills transfer and how", 4),
                option("I believe some of my skills transfer", 3),
                option("I am unsure which skills are relevant", 2),
                option("I think I would be starting from zero", 1),
            ],
        },
        Category {
            key: "target_industry_knowledge",
            label: "Target Industry Knowledge",
            options: &[
                option("I understand the new industry's roles, language and hiring practices", 5),
                option("I have a good understanding of the new industry", 4),
                option("I know the basics of the new industry", 3),
                option("I have only a surface-level view of it", 2),
                option("I know very little about the field I want to enter", 1),
            ],
        },
        Category {
            key: "financial_runway",
            label: "Financial Runway",
            options: &[
                option("I have 12+ months of savings to support the transition", 5),
                option("I have 6-12 months of financial cushion", 4),
                option("I have 3-6 months of savings", 3),
                option("I could manage less than 3 months of reduced income", 2),
                option("I cannot afford any drop in income", 1),
            ],
        },
        Category {
            key: "retraining_progress",
            label: "Retraining Progress",
            options: &[
                option("I have completed the qualifications the new field expects", 5),
                option("I am well into a relevant course or qualification", 4),
                option("I have enrolled in or started retraining", 3),
                option("I have identified courses but not started", 2),
                option("I do not know what training I need", 1),
            ],
        },
        Category {
            key: "network_in_target_field",
            label: "Network in Target Field",
            options: &[
                option("I have mentors and regular contacts working in my target field", 5),
                option("I know several people in the field I can ask for advice", 4),
                option("I have one or two contacts in the field", 3),
                option("I have started looking for contacts", 2),
                option("I do not know anyone in my target field", 1),
            ],
        },
        Category {
            key: "risk_tolerance",
            label: "Risk Tolerance",
            options: &[
                option("I am comfortable starting at a lower level to build a new career", 5),
                option("I accept some short-term setbacks for long-term gain", 4),
                option("I can accept modest risk if the plan is solid", 3),
                option("I am reluctant to accept any step back", 2),
                option("I need the change to carry no risk at all", 1),
            ],
        },
    ],
};
