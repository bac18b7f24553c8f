use std::sync::Arc;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::models::{JobPatch, JobPayload};
use crate::api::validation::ErrorResponse;
use crate::db::job_repository::JobRepository;
use crate::db::models::{now_timestamp, JobRecord};
use crate::db::store::{DocumentStore, StoreError};

/// Service-level errors
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request body failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// No job with the requested id
    #[error("Job not found: {0}")]
    NotFound(String),

    /// Loading or saving the data file failed
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ServiceError {
    fn store(message: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| ServiceError::Store { message, source }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ServiceError::Validation(msg) => {
                warn!("Validation error: {}", msg);
                ErrorResponse::new(msg.clone())
            }
            ServiceError::NotFound(id) => {
                warn!("Job not found: {}", id);
                ErrorResponse::new("Not found")
            }
            ServiceError::Store { message, source } => {
                error!("{}: {}", message, source);
                ErrorResponse::new(*message).with_error(source.to_string())
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Job service containing business logic
pub struct JobService {
    store: Arc<DocumentStore>,
}

impl JobService {
    /// Create a new JobService backed by `store`
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }

    pub async fn list_jobs(&self) -> Result<Vec<JobRecord>, ServiceError> {
        JobRepository::find_all(&self.store)
            .await
            .map_err(ServiceError::store("Error retrieving job"))
    }

    pub async fn get_job(&self, id: &str) -> Result<JobRecord, ServiceError> {
        JobRepository::find_by_id(&self.store, id)
            .await
            .map_err(ServiceError::store("Error retrieving job"))?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    /// Create a single job
    ///
    /// Assigns a fresh UUID and `createdAt` stamp, then appends the record.
    /// The payload is expected to have passed validation at the extractor.
    pub async fn create_job(&self, payload: JobPayload) -> Result<JobRecord, ServiceError> {
        info!("Service: Creating job with title={:?}", payload.job_title);

        let record = payload.into_record(Uuid::new_v4().to_string(), now_timestamp());
        let job = JobRepository::create(&self.store, record)
            .await
            .map_err(ServiceError::store("Error creating job"))?;

        info!("Service: Job created successfully with id={}", job.id);
        Ok(job)
    }

    /// Shallow-merge `patch` into an existing job
    pub async fn update_job(&self, id: &str, patch: JobPatch) -> Result<JobRecord, ServiceError> {
        let job = JobRepository::update(&self.store, id, patch)
            .await
            .map_err(ServiceError::store("Error updating job"))?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        info!("Service: Job {} updated", job.id);
        Ok(job)
    }

    pub async fn delete_job(&self, id: &str) -> Result<JobRecord, ServiceError> {
        let job = JobRepository::delete(&self.store, id)
            .await
            .map_err(ServiceError::store("Error deleting job"))?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        info!("Service: Job {} deleted", job.id);
        Ok(job)
    }
}
