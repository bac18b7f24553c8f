use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use validator::{Validate, ValidationError};

use crate::db::models::JobRecord;

/// Body of `POST /api/job`
///
/// Passes validation when at least one field carries a truthy value. Values
/// are taken as sent, whatever their JSON type.
#[derive(Deserialize, Serialize, Debug, Default, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_any_field_present"))]
pub struct JobPayload {
    pub employer_name: Option<Value>,
    pub job_title: Option<Value>,
    pub job_location: Option<Value>,
    pub job_salary: Option<Value>,
    pub job_link: Option<Value>,
    pub job_description: Option<Value>,
}

impl JobPayload {
    fn fields(self) -> [(&'static str, Option<Value>); 6] {
        [
            ("employerName", self.employer_name),
            ("jobTitle", self.job_title),
            ("jobLocation", self.job_location),
            ("jobSalary", self.job_salary),
            ("jobLink", self.job_link),
            ("jobDescription", self.job_description),
        ]
    }

    fn any_field_present(&self) -> bool {
        [
            &self.employer_name,
            &self.job_title,
            &self.job_location,
            &self.job_salary,
            &self.job_link,
            &self.job_description,
        ]
        .into_iter()
        .any(|field| field.as_ref().is_some_and(is_truthy))
    }

    /// Build a new record with the given id and creation stamp
    pub fn into_record(self, id: String, created_at: String) -> JobRecord {
        let mut record = JobRecord::with_id(id);
        for (key, value) in self.fields() {
            if let Some(value) = value {
                record.set_field(key.to_string(), value);
            }
        }
        record.created_at = Some(created_at);
        record
    }
}

/// Empty strings, zero, `false` and `null` do not count as a value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn validate_any_field_present(payload: &JobPayload) -> Result<(), ValidationError> {
    if payload.any_field_present() {
        return Ok(());
    }
    let mut err = ValidationError::new("missing_fields");
    err.message = Some(Cow::Borrowed("missing fields"));
    Err(err)
}

/// Body of `PATCH /api/job/{id}`: a shallow set of top-level keys
///
/// Every key overwrites the stored one as sent, `null` included, except the
/// server-owned `id`, `createdAt` and `updatedAt`.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
pub struct JobPatch(Map<String, Value>);

/// Keys owned by the server that a patch can never overwrite
const RESERVED_KEYS: [&str; 3] = ["id", "createdAt", "updatedAt"];

impl From<Map<String, Value>> for JobPatch {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl JobPatch {
    pub fn apply_to(self, job: &mut JobRecord) {
        for (key, value) in self.0 {
            if RESERVED_KEYS.contains(&key.as_str()) {
                debug!("Ignoring reserved key '{}' in patch for job {}", key, job.id);
                continue;
            }
            job.set_field(key, value);
        }
    }
}
