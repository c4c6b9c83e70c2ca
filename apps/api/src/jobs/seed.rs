//! Default job postings loaded into a fresh catalog.

use chrono::NaiveDate;

use crate::models::job::JobPosting;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn posting(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    description: &str,
    requirements: &[&str],
    skills: &[&str],
    post_date: (i32, u32, u32),
) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: Some(location.to_string()),
        description: description.to_string(),
        requirements: strings(requirements),
        skills: strings(skills),
        post_date: NaiveDate::from_ymd_opt(post_date.0, post_date.1, post_date.2),
    }
}

pub fn default_job_postings() -> Vec<JobPosting> {
    vec![
        posting(
            "1",
            "Frontend Developer",
            "TechCorp",
            "Remote",
            "We are looking for an experienced Frontend Developer proficient in React.js to join our team. The ideal candidate will have experience building responsive web applications and working with modern JavaScript frameworks.",
            &[
                "Bachelor's degree in Computer Science or related field",
                "3+ years of experience with React.js",
                "Proficiency in HTML, CSS, and JavaScript",
                "Experience with responsive design",
            ],
            &["React.js", "JavaScript", "HTML", "CSS", "TypeScript", "Redux", "Git", "Responsive Design"],
            (2025, 3, 15),
        ),
        posting(
            "2",
            "Backend Developer",
            "DataSoft",
            "San Francisco, CA",
            "We are seeking a Backend Developer with strong Python skills to develop and maintain our server-side applications. The ideal candidate will have experience with Flask or Django and database management.",
            &[
                "Bachelor's or Master's in Computer Science",
                "2+ years of experience with Python",
                "Knowledge of SQL and NoSQL databases",
                "Experience with RESTful API design",
            ],
            &["Python", "Flask", "Django", "PostgreSQL", "RESTful APIs", "Docker", "AWS", "Git"],
            (2025, 3, 20),
        ),
        posting(
            "3",
            "Full Stack Developer",
            "InnovateTech",
            "Chicago, IL",
            "We are looking for a Full Stack Developer to work on our web applications. The candidate should be comfortable working with both frontend and backend technologies.",
            &[
                "Bachelor's degree in Computer Science or equivalent",
                "4+ years of experience in full stack development",
                "Strong proficiency in JavaScript and a backend language such as Node.js",
                "Experience with databases and API design",
            ],
            &["JavaScript", "Node.js", "React", "MongoDB", "RESTful APIs", "Git", "AWS", "Docker"],
            (2025, 3, 25),
        ),
        posting(
            "4",
            "Data Scientist",
            "AnalyticsPro",
            "Boston, MA",
            "We are seeking a Data Scientist to join our analytics team. The ideal candidate will have strong statistical analysis skills and experience with machine learning models.",
            &[
                "Master's or PhD in Statistics, Computer Science, or related field",
                "3+ years of experience in data science",
                "Proficiency in Python and R",
                "Experience with machine learning algorithms",
            ],
            &["Python", "R", "SQL", "Machine Learning", "TensorFlow", "PyTorch", "Data Visualization", "Statistics"],
            (2025, 3, 18),
        ),
        posting(
            "5",
            "UI/UX Designer",
            "DesignHub",
            "Seattle, WA",
            "We are looking for a UI/UX Designer to create engaging and intuitive user experiences for our products.",
            &[
                "Bachelor's degree in Design, HCI, or related field",
                "3+ years of experience in UI/UX design",
                "Proficiency in design tools such as Figma, Adobe XD",
                "Portfolio demonstrating UI/UX projects",
            ],
            &["UI Design", "UX Research", "Wireframing", "Prototyping", "Figma", "Adobe XD", "User Testing", "Responsive Design"],
            (2025, 3, 22),
        ),
    ]
}
