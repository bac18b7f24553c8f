use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;

use crate::api::validation::ErrorResponse;

#[derive(Serialize)]
struct NotFoundResponse {
    #[serde(flatten)]
    envelope: ErrorResponse,
    #[serde(rename = "requestedUrl")]
    requested_url: String,
}

/// Service banner listing the available endpoints
#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the job board REST API!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "allResources": "GET /api/job",
            "singleResource": "GET /api/job/:id",
            "createResource": "POST /api/job",
            "updateResource": "PATCH /api/job/:id",
            "deleteResource": "DELETE /api/job/:id"
        }
    }))
}

/// Catch-all for unmatched routes
async fn route_not_found(req: HttpRequest) -> impl Responder {
    HttpResponse::NotFound().json(NotFoundResponse {
        envelope: ErrorResponse::new("Route not found"),
        requested_url: req.uri().to_string(),
    })
}

pub fn index_config(config: &mut web::ServiceConfig) {
    config
        .service(index)
        .default_service(web::to(route_not_found));
}
