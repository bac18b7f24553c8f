pub mod health;
pub mod index;
pub mod job;
pub mod validation;

use actix_web::web;

/// Register every route of the service
pub fn api_config(config: &mut web::ServiceConfig) {
    config
        .configure(health::health_config)
        .configure(job::handlers::job_config)
        .configure(index::index_config);
}
