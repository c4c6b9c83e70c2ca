use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

/// A job posting. Immutable once created; `skills` order is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub post_date: Option<NaiveDate>,
}

/// Payload for authoring a new job posting.
#[derive(Debug, Clone, Deserialize)]
pub struct NewJobPosting {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
}

impl NewJobPosting {
    /// Checks required fields and normalizes skills (trimmed, blanks dropped,
    /// order kept). A posting with no skills cannot be scored against.
    pub fn validate(mut self) -> Result<Self, AppError> {
        for (field, value) in [
            ("title", &self.title),
            ("company", &self.company),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} cannot be empty")));
            }
        }

        self.skills = self
            .skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if self.skills.is_empty() {
            return Err(AppError::Validation(
                "skills must contain at least one entry".to_string(),
            ));
        }

        self.requirements.retain(|r| !r.trim().is_empty());
        Ok(self)
    }

    pub fn into_posting(self, id: String, post_date: NaiveDate) -> JobPosting {
        JobPosting {
            id,
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.filter(|l| !l.trim().is_empty()),
            description: self.description,
            requirements: self.requirements,
            skills: self.skills,
            post_date: Some(post_date),
        }
    }
}
