use super::{option, Category, WeightTable};
use crate::models::assessment::AssessmentType;

pub static TABLE: WeightTable = WeightTable {
    assessment_type: AssessmentType::Ijrl,
    categories: &[
        Category {
            key: "self_awareness",
            label: "Self-Awareness",
            options: &[
                option("I clearly know my strengths, values and the work environment I need", 5),
                option("I understand most of my strengths and preferences", 4),
                option("I have a general sense of what suits me", 3),
                option("I am still figuring out what I am good at", 2),
                option("I have not reflected on my strengths or values", 1),
            ],
        },
        Category {
            key: "role_alignment",
            label: "Role Alignment",
            options: &[
                option("My ideal job is precisely defined by title, company type and scope", 5),
                option("I know the role I want and the kind of organisation", 4),
                option("I know the field but not the specific role", 3),
                option("I have several conflicting ideas of my ideal job", 2),
                option("I cannot describe my ideal job", 1),
            ],
        },
        Category {
            key: "skills_match",
            label: "Skills Match",
            options: &[
                option("I already meet or exceed every core requirement of my ideal job", 5),
                option("I meet most requirements and am closing the remaining gaps", 4),
                option("I meet about half of the requirements", 3),
                option("I am missing several key requirements", 2),
                option("I do not know what the role requires", 1),
            ],
        },
        Category {
            key: "market_research",
            label: "Market Research",
            options: &[
                option("I have researched target employers, salaries and hiring trends in depth", 5),
                option("I have a shortlist of target employers", 4),
                option("I have browsed job postings in my area of interest", 3),
                option("I have done very little research", 2),
                option("I have not researched the job market", 1),
            ],
        },
        Category {
            key: "personal_brand",
            label: "Personal Brand",
            options: &[
                option("My resume, profiles and portfolio tell one consistent, compelling story", 5),
                option("My resume and online profile are polished and current", 4),
                option("My materials are up to date but generic", 3),
                option("My materials are outdated", 2),
                option("I have no resume or online presence", 1),
            ],
        },
        Category {
            key: "interview_readiness",
            label: "Interview Readiness",
            options: &[
                option("I have rehearsed stories for common questions and do mock interviews", 5),
                option("I prepare thoroughly for each interview", 4),
                option("I prepare a little before interviews", 3),
                option("I usually go into interviews unprepared", 2),
                option("I have never been through a professional interview", 1),
            ],
        },
        Category {
            key: "negotiation",
            label: "Negotiation Confidence",
            options: &[
                option("I know my market value and negotiate offers confidently", 5),
                option("I have negotiated offers before with some success", 4),
                option("I would negotiate but am unsure how", 3),
                option("I usually accept the first offer", 2),
                option("I am uncomfortable discussing pay at all", 1),
            ],
        },
    ],
};
