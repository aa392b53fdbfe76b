use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
}

impl Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Open => f.write_str("Open"),
            JobStatus::Closed => f.write_str("Closed"),
        }
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(JobStatus::Open),
            "Closed" => Ok(JobStatus::Closed),
            other => Err(format!("unknown job status: {other}")),
        }
    }
}

/// A job posting as returned by `/api/jobs`.
///
/// `category`, `type` and `postedDate` are only present on listings that carry
/// browse metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub salary: String,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
}

impl Job {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            company: company.into(),
            location: location.into(),
            salary: String::new(),
            status: JobStatus::Open,
            category: None,
            job_type: None,
            posted_date: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Body of `POST /api/jobs` and `PUT /api/jobs/:id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub status: JobStatus,
}

/// Accepts `"50000"` and `50000` alike; the API has returned both.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
        Raw::Null(()) => String::new(),
    })
}
