use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::db::DocumentStore;

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    store: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

async fn check_store(
    store: &DocumentStore,
    ok_status: &str,
    failed_status: &str,
) -> HttpResponse {
    match store.read().await {
        Ok(_) => HttpResponse::Ok().json(HealthResponse {
            status: ok_status.to_string(),
            store: "readable".to_string(),
            error: None,
        }),
        Err(e) => {
            error!("Store check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: failed_status.to_string(),
                store: "unreadable".to_string(),
                error: Some(e.to_string()),
            })
        }
    }
}

/// Health check endpoint
///
/// Loads the data file to confirm it is present and parses.
#[get("/health")]
async fn health_check(store: web::Data<DocumentStore>) -> impl Responder {
    check_store(&store, "healthy", "unhealthy").await
}

/// Readiness check endpoint
///
/// Returns 503 while the data file cannot be read; recovers once it can.
#[get("/ready")]
async fn readiness_check(store: web::Data<DocumentStore>) -> impl Responder {
    check_store(&store, "ready", "not_ready").await
}

/// Liveness check endpoint
///
/// Simple check that the process is alive. Does not touch the store.
#[get("/live")]
async fn liveness_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "alive".to_string(),
        store: "not_checked".to_string(),
        error: None,
    })
}

pub fn health_config(config: &mut web::ServiceConfig) {
    config
        .service(health_check)
        .service(readiness_check)
        .service(liveness_check);
}
