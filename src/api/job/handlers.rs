use actix_web::{
    delete, get, patch, post,
    web::{self, scope, Data, Path, ServiceConfig},
    HttpResponse,
};
use actix_web_validator::Json;
use serde_json::{Map, Value};

use super::dto::{JobListResponse, JobResponse};
use super::models::{JobPatch, JobPayload};
use super::service::{JobService, ServiceError};

#[get("")]
async fn list_jobs(service: Data<JobService>) -> Result<HttpResponse, ServiceError> {
    let jobs = service.list_jobs().await?;
    Ok(HttpResponse::Ok().json(JobListResponse::new(jobs)))
}

#[get("/{id}")]
async fn get_job(
    service: Data<JobService>,
    path: Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let job = service.get_job(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(JobResponse::new(job)))
}

#[post("")]
async fn create_job(
    service: Data<JobService>,
    payload: Json<JobPayload>,
) -> Result<HttpResponse, ServiceError> {
    let job = service.create_job(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(JobResponse::new(job)))
}

/// A missing or unparsable body merges nothing; only `updatedAt` changes
#[patch("/{id}")]
async fn update_job(
    service: Data<JobService>,
    path: Path<String>,
    body: Option<web::Json<Map<String, Value>>>,
) -> Result<HttpResponse, ServiceError> {
    let patch = body
        .map(|fields| JobPatch::from(fields.into_inner()))
        .unwrap_or_default();
    let job = service.update_job(&path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(JobResponse::new(job)))
}

/// Responds with the removed record wrapped in a one-element array
#[delete("/{id}")]
async fn delete_job(
    service: Data<JobService>,
    path: Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let job = service.delete_job(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(JobResponse::new(vec![job])))
}

pub fn job_config(config: &mut ServiceConfig) {
    config.service(
        scope("/api/job")
            .service(list_jobs)
            .service(create_job)
            .service(get_job)
            .service(update_job)
            .service(delete_job),
    );
}
