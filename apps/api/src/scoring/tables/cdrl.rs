use super::{option, Category, WeightTable};
use crate::models::assessment::AssessmentType;

pub static TABLE: WeightTable = WeightTable {
    assessment_type: AssessmentType::Cdrl,
    categories: &[
        Category {
            key: "professional_experience",
            label: "Professional Experience",
            options: &[
                option("I have 10+ years of progressive experience with increasing responsibility", 5),
                option("I have 6-10 years of experience including some senior responsibilities", 4),
                option("I have 3-5 years of solid experience in my field", 3),
                option("I have 1-2 years of experience and am still building my foundation", 2),
                option("I have less than a year of professional experience", 1),
            ],
        },
        Category {
            key: "skill_development",
            label: "Skill Development",
            options: &[
                option("I follow a structured learning plan and regularly earn new certifications", 5),
                option("I take courses or training several times a year", 4),
                option("I learn new skills when my role requires it", 3),
                option("I occasionally read or watch content related to my work", 2),
                option("I have not invested in new skills for some time", 1),
            ],
        },
        Category {
            key: "leadership",
            label: "Leadership & Influence",
            options: &[
                option("I lead teams or initiatives and mentor others regularly", 5),
                option("I often lead projects and guide junior colleagues", 4),
                option("I take the lead on tasks when the opportunity arises", 3),
                option("I prefer contributing individually but support team leads", 2),
                option("I have not yet had leadership opportunities", 1),
            ],
        },
        Category {
            key: "career_goals",
            label: "Career Goal Clarity",
            options: &[
                option("I have clear 1, 3 and 5 year goals with concrete milestones", 5),
                option("I have defined goals and a rough plan to reach them", 4),
                option("I know the direction I want to go but have no detailed plan", 3),
                option("I have some ideas but my goals keep changing", 2),
                option("I am unsure what I want from my career", 1),
            ],
        },
        Category {
            key: "networking",
            label: "Professional Networking",
            options: &[
                option("I maintain a strong network and actively engage at industry events", 5),
                option("I have a good network and keep in touch with key contacts", 4),
                option("I network mostly within my current organisation", 3),
                option("I have a small network and rarely reach out", 2),
                option("I have not built a professional network", 1),
            ],
        },
        Category {
            key: "adaptability",
            label: "Adaptability to Change",
            options: &[
                option("I thrive on change and help others navigate it", 5),
                option("I adapt quickly to new tools, teams and processes", 4),
                option("I adjust to change given some time", 3),
                option("I find change uncomfortable but manage it", 2),
                option("I struggle significantly when things change", 1),
            ],
        },
        Category {
            key: "performance_record",
            label: "Performance Track Record",
            options: &[
                option("I consistently exceed targets and have been recognised for it", 5),
                option("I regularly meet and sometimes exceed expectations", 4),
                option("I meet expectations in most review cycles", 3),
                option("My performance has been inconsistent", 2),
                option("I have not received formal performance feedback", 1),
            ],
        },
    ],
};
