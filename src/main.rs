use std::sync::Arc;

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use clap::Parser;
use tracing::info;

use job_board_api::{
    api::{api_config, job::JobService, validation},
    cli::{Cli, Command},
    config::Config,
    db::{seed::default_document, DocumentStore},
    logging,
    shutdown::ShutdownCoordinator,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment, then apply CLI overrides
    let Config {
        host,
        port,
        db_path,
        log_dir,
        max_payload_size,
    } = Config::from_env()
        .map_err(std::io::Error::other)?
        .merge_cli(&cli);

    logging::init(&log_dir)?;

    let store = Arc::new(DocumentStore::new(db_path, default_document()));

    if cli.command == Some(Command::Seed) {
        store.reset().await.map_err(std::io::Error::other)?;
        return Ok(());
    }

    info!("Starting job-board-api application");
    info!("Configuration loaded successfully:");
    info!("  - Data file: {}", store.path().display());
    info!("  - Log directory: {}", log_dir.display());
    info!("  - Max payload size: {} bytes", max_payload_size);

    let server_store = store.clone();

    let server = HttpServer::new(move || {
        // JobService and the health checks share the same store instance
        let job_service = web::Data::new(JobService::new(server_store.clone()));
        let store_data = web::Data::from(server_store.clone());

        // Configure payload size limits globally
        let payload_config = web::PayloadConfig::default().limit(max_payload_size);
        let json_config = validation::json_config().limit(max_payload_size);
        let patch_json_config = web::JsonConfig::default().limit(max_payload_size);

        App::new()
            .wrap(NormalizePath::trim())
            .app_data(job_service)
            .app_data(store_data)
            .app_data(payload_config)
            .app_data(json_config)
            .app_data(patch_json_config)
            .configure(api_config)
    });

    info!("Server starting on http://{}:{}", host, port);

    let server = server.bind((host.as_str(), port))?.run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    ShutdownCoordinator::new(server_handle, server_task)
        .wait_for_shutdown()
        .await
}
