// Resume analysis prompt templates.

pub const RESUME_ANALYSIS_SYSTEM: &str = "\
You are an experienced career coach scoring resumes for a readiness assessment. \
Judge only what the resume text shows. Do not invent experience or credentials.";

pub const RESUME_ANALYSIS_PROMPT: &str = r#"Score the following resume for a candidate taking the "{assessment_title}" assessment.

RESUME TEXT:
{resume_text}

Score from 0 to 100 how well the resume demonstrates readiness for the stage this assessment covers.
90+ is exceptional, 70 is typical, below 40 means the resume is missing most essentials.

OUTPUT SCHEMA (return exactly this structure):
{
  "resumeScore": number,
  "summary": "two or three sentences",
  "strengths": ["string"],
  "improvements": ["string"]
}"#;
