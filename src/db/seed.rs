use serde_json::Number;

use super::models::{JobDocument, JobRecord};

fn seed_record(
    id: &str,
    employer: &str,
    title: &str,
    location: &str,
    salary: u64,
    link: &str,
    description: &str,
) -> JobRecord {
    JobRecord {
        employer_name: Some(employer.to_string()),
        job_title: Some(title.to_string()),
        job_location: Some(location.to_string()),
        job_salary: Some(Number::from(salary)),
        job_link: Some(link.to_string()),
        job_description: Some(description.to_string()),
        ..JobRecord::with_id(id)
    }
}

/// Document written when no data file exists yet
pub fn default_document() -> JobDocument {
    JobDocument {
        job: vec![
            seed_record(
                "1",
                "Amazon",
                "Software Developer",
                "New York",
                100_000,
                "https://www.amazon.jobs/en/jobs/3092174/software-engineer",
                "Twitch is the world’s biggest live streaming service, with global communities \
                 built around gaming, entertainment, music, sports, cooking, and more. It is where \
                 thousands of communities come together for whatever, every day. We’re about \
                 community, inside and out. You’ll find coworkers who are eager to team up, \
                 collaborate, and smash (or elegantly solve) problems together. We’re on a quest \
                 to empower live communities, so if this sounds good to you, see what we’re up to \
                 on LinkedIn and X,  and discover the projects we’re solving ",
            ),
            seed_record(
                "2",
                "The DYO Inc.",
                "Junior Software Engineer",
                "New York",
                70_000,
                "https://app.joinhandshake.com/e/988295",
                "We're looking for a Junior Software Engineer to join our team and contribute to \
                 an exciting project that combines modern web technologies with 3D visualization \
                 and e-commerce capabilities",
            ),
            seed_record(
                "3",
                "Crunchy Tech",
                "Software Engineering Intern",
                "California",
                60_000,
                "https://app.joinhandshake.com/jobs/10496109?searchId=",
                "Crunchy Tech is looking for a driven and talented Computer Science or Computer \
                 Engineering student to join our team for a one-semester internship during the \
                 Spring 2026 term. This is an excellent opportunity for a student in their junior \
                 or senior year to gain hands-on experience in a fast-paced, innovative tech \
                 environment. ",
            ),
        ],
    }
}
