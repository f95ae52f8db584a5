use super::{option, Category, WeightTable};
use crate::models::assessment::AssessmentType;

pub static TABLE: WeightTable = WeightTable {
    assessment_type: AssessmentType::Ilrl,
    categories: &[
        Category {
            key: "learning_goals",
            label: "Learning Goals",
            options: &[
                option("I have written specific goals for what I want to learn during the internship", 5),
                option("I know the main skills I want to gain", 4),
                option("I have a general idea of what I want to learn", 3),
                option("I mainly want the internship for my resume", 2),
                option("I have not thought about what I want to learn", 1),
            ],
        },
        Category {
            key: "foundational_knowledge",
            label: "Foundational Knowledge",
            options: &[
                option("I have strong coursework and side projects in the internship's domain", 5),
                option("I have completed the core courses for this area", 4),
                option("I have introductory knowledge of the area", 3),
                option("I have only self-taught basics", 2),
                option("I am new to this area entirely", 1),
            ],
        },
        Category {
            key: "initiative",
            label: "Initiative",
            options: &[
                option("I regularly start projects and seek out work without being asked", 5),
                option("I often volunteer for tasks and ask for more", 4),
                option("I take initiative when I feel confident", 3),
                option("I usually wait to be told what to do", 2),
                option("I rarely take on anything beyond what is assigned", 1),
            ],
        },
        Category {
            key: "feedback_receptiveness",
            label: "Receptiveness to Feedback",
            options: &[
                option("I actively ask for feedback and act on it quickly", 5),
                option("I welcome feedback and use it to improve", 4),
                option("I accept feedback though it sometimes stings", 3),
                option("I find criticism hard to take", 2),
                option("I tend to get defensive when given feedback", 1),
            ],
        },
        Category {
            key: "time_management",
            label: "Time Management",
            options: &[
                option("I plan my time carefully and reliably deliver ahead of deadlines", 5),
                option("I usually meet deadlines with good planning", 4),
                option("I meet most deadlines, sometimes at the last minute", 3),
                option("I often struggle to meet deadlines", 2),
                option("I frequently miss deadlines", 1),
            ],
        },
        Category {
            key: "teamwork",
            label: "Teamwork",
            options: &[
                option("I have coordinated team projects and resolved group conflicts", 5),
                option("I collaborate well and contribute actively in teams", 4),
                option("I work fine in teams when roles are clear", 3),
                option("I prefer to work alone whenever possible", 2),
                option("I find working in teams very difficult", 1),
            ],
        },
        Category {
            key: "professional_conduct",
            label: "Professional Conduct",
            options: &[
                option("I consistently model punctuality, reliability and professional communication", 5),
                option("I am reliable and communicate professionally", 4),
                option("I am mostly reliable but sometimes informal", 3),
                option("I am still learning professional norms", 2),
                option("I am unfamiliar with professional expectations", 1),
            ],
        },
    ],
};
