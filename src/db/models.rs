use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use tracing::debug;

/// Persisted document: `{ "job": [ ... ] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDocument {
    #[serde(default)]
    pub job: Vec<JobRecord>,
}

/// A single job posting as stored on disk and returned by the API
///
/// A known key whose value has an unexpected JSON type (including `null`)
/// is kept verbatim in `extra` under the same key and the typed field stays
/// `None`, so a key never appears in both places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct JobRecord {
    /// Always a string once loaded; numeric ids from older files are converted.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_salary: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Keys outside the known shape, and known keys holding other JSON types
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobRecord {
    /// Empty record carrying only an id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            employer_name: None,
            job_title: None,
            job_location: None,
            job_salary: None,
            job_link: None,
            job_description: None,
            created_at: None,
            updated_at: None,
            extra: Map::new(),
        }
    }

    /// Set one top-level key, replacing whatever the record held for it
    ///
    /// `id` is owned by the store and is never changed here.
    pub fn set_field(&mut self, key: String, value: Value) {
        let leftover = match key.as_str() {
            "id" => {
                debug!("Ignoring attempt to overwrite id of job {}", self.id);
                return;
            }
            "employerName" => assign_text(&mut self.employer_name, value),
            "jobTitle" => assign_text(&mut self.job_title, value),
            "jobLocation" => assign_text(&mut self.job_location, value),
            "jobSalary" => assign_number(&mut self.job_salary, value),
            "jobLink" => assign_text(&mut self.job_link, value),
            "jobDescription" => assign_text(&mut self.job_description, value),
            "createdAt" => assign_text(&mut self.created_at, value),
            "updatedAt" => assign_text(&mut self.updated_at, value),
            _ => Some(value),
        };

        match leftover {
            Some(raw) => {
                self.extra.insert(key, raw);
            }
            None => {
                self.extra.remove(&key);
            }
        }
    }
}

fn assign_text(slot: &mut Option<String>, value: Value) -> Option<Value> {
    match value {
        Value::String(text) => {
            *slot = Some(text);
            None
        }
        other => {
            *slot = None;
            Some(other)
        }
    }
}

fn assign_number(slot: &mut Option<Number>, value: Value) -> Option<Value> {
    match value {
        Value::Number(n) => {
            *slot = Some(n);
            None
        }
        other => {
            *slot = None;
            Some(other)
        }
    }
}

impl TryFrom<Map<String, Value>> for JobRecord {
    type Error = String;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = match map.remove("id") {
            Some(Value::String(id)) => id,
            Some(Value::Number(id)) => id.to_string(),
            Some(other) => return Err(format!("job id must be a string or number, got {}", other)),
            None => return Err("job record without an id".to_string()),
        };

        let mut record = JobRecord::with_id(id);
        for (key, value) in map {
            record.set_field(key, value);
        }
        Ok(record)
    }
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
