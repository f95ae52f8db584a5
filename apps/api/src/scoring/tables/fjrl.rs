use super::{option, Category, WeightTable};
use crate::models::assessment::AssessmentType;

pub static TABLE: WeightTable = WeightTable {
    assessment_type: AssessmentType::Fjrl,
    categories: &[
        Category {
            key: "academic_foundation",
            label: "Academic Foundation",
            options: &[
                option("I graduated with distinction in a field directly related to my target job", 5),
                option("I have a relevant degree with good grades", 4),
                option("I have a degree in a partially related field", 3),
                option("I am still completing my studies", 2),
                option("My education is unrelated to the jobs I am targeting", 1),
            ],
        },
        Category {
            key: "practical_experience",
            label: "Practical Experience",
            options: &[
                option("I completed multiple internships or substantial real-world projects", 5),
                option("I completed one internship or a significant project", 4),
                option("I have part-time or volunteer experience", 3),
                option("I have only academic project experience", 2),
                option("I have no practical experience yet", 1),
            ],
        },
        Category {
            key: "technical_skills",
            label: "Technical Skills",
            options: &[
                option("I am proficient in the core tools of my field and can show a portfolio", 5),
                option("I am comfortable with most tools used in my target role", 4),
                option("I know the basics and can learn the rest on the job", 3),
                option("I am aware of the tools but have little hands-on practice", 2),
                option("I do not yet know which skills my target role needs", 1),
            ],
        },
        Category {
            key: "communication",
            label: "Communication",
            options: &[
                option("I present confidently and write clearly for any audience", 5),
                option("I communicate well in most professional situations", 4),
                option("I communicate adequately but get nervous presenting", 3),
                option("I find professional communication challenging", 2),
                option("I avoid speaking or writing in professional settings", 1),
            ],
        },
        Category {
            key: "job_search_preparation",
            label: "Job Search Preparation",
            options: &[
                option("My resume is tailored, my profiles are current and I practise interviews", 5),
                option("My resume is ready and I have applied to several roles", 4),
                option("I have a draft resume and have started looking", 3),
                option("I have not prepared a resume yet", 2),
                option("I have not started preparing for my job search", 1),
            ],
        },
        Category {
            key: "workplace_awareness",
            label: "Workplace Awareness",
            options: &[
                option("I understand workplace norms and have worked in professional teams", 5),
                option("I have a good sense of professional expectations", 4),
                option("I have some idea of how workplaces operate", 3),
                option("I am unsure what employers expect day to day", 2),
                option("I have no exposure to professional workplaces", 1),
            ],
        },
        Category {
            key: "career_direction",
            label: "Career Direction",
            options: &[
                option("I know exactly which role and industry I want to start in", 5),
                option("I have narrowed my options to a couple of roles", 4),
                option("I have a general area in mind", 3),
                option("I am considering many unrelated options", 2),
                option("I have no idea what job I want", 1),
            ],
        },
    ],
};
