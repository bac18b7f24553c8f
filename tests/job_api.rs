//! End-to-end tests for the job routes against a temp-file store

use std::sync::Arc;
use std::time::Duration;

use actix_web::{
    dev::{Service, ServiceResponse},
    http::{header, StatusCode},
    middleware::NormalizePath,
    rt, test, web, App,
};
use serde_json::{json, Value};

use job_board_api::{
    api::{api_config, job::JobService, validation},
    db::{seed::default_document, DocumentStore},
};

fn temp_store() -> (tempfile::TempDir, Arc<DocumentStore>) {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(DocumentStore::new(
        dir.path().join("db.json"),
        default_document(),
    ));
    (dir, store)
}

async fn init_app(
    store: Arc<DocumentStore>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .wrap(NormalizePath::trim())
            .app_data(web::Data::new(JobService::new(store.clone())))
            .app_data(web::Data::from(store))
            .app_data(validation::json_config())
            .configure(api_config),
    )
    .await
}

async fn call(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    req: test::TestRequest,
) -> (StatusCode, Value) {
    let resp = test::call_service(app, req.to_request()).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

async fn job_count(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
) -> u64 {
    let (status, body) = call(app, test::TestRequest::get().uri("/api/job")).await;
    assert_eq!(status, StatusCode::OK);
    body["count"].as_u64().unwrap()
}

fn new_job() -> Value {
    json!({
        "employerName": "Initech",
        "jobTitle": "Backend Engineer",
        "jobLocation": "Austin",
        "jobSalary": 125000,
        "jobLink": "https://initech.example/jobs/1",
        "jobDescription": "Maintain the TPS report pipeline"
    })
}

#[actix_web::test]
async fn list_returns_seeded_jobs_with_count() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;

    let (status, body) = call(&app, test::TestRequest::get().uri("/api/job")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(3));
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn seed_record_reachable_by_path_id() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;

    let (status, body) = call(&app, test::TestRequest::get().uri("/api/job/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["employerName"], json!("Amazon"));
    assert_eq!(body["data"]["jobSalary"], json!(100000));

    let (status, _) = call(&app, test::TestRequest::get().uri("/api/job/01")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn numeric_ids_from_existing_file_are_reachable() {
    let (dir, store) = temp_store();
    std::fs::write(
        dir.path().join("db.json"),
        r#"{"job":[{"id":17,"employerName":"Legacy Co","jobSalary":1}]}"#,
    )
    .unwrap();
    let app = init_app(store).await;

    let (status, body) = call(&app, test::TestRequest::get().uri("/api/job/17")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["employerName"], json!("Legacy Co"));
}

#[actix_web::test]
async fn created_job_round_trips_through_get() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;

    let (status, created) = call(
        &app,
        test::TestRequest::post().uri("/api/job").set_json(new_job()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], json!(true));

    let id = created["data"]["id"].as_str().unwrap().to_string();
    assert!(created["data"]["createdAt"].is_string());
    assert!(created["data"].get("updatedAt").is_none());
    for (key, value) in new_job().as_object().unwrap() {
        assert_eq!(&created["data"][key], value, "field {key}");
    }

    let (status, fetched) = call(
        &app,
        test::TestRequest::get().uri(&format!("/api/job/{id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], created["data"]);
}

#[actix_web::test]
async fn count_tracks_creates_and_deletes() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;
    let seed = job_count(&app).await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let (_, body) = call(
            &app,
            test::TestRequest::post().uri("/api/job").set_json(new_job()),
        )
        .await;
        ids.push(body["data"]["id"].as_str().unwrap().to_string());
    }
    for id in &ids[..2] {
        let (status, body) = call(
            &app,
            test::TestRequest::delete().uri(&format!("/api/job/{id}")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["id"], json!(id));
    }

    assert_eq!(job_count(&app).await, seed + 3 - 2);
}

#[actix_web::test]
async fn delete_of_unknown_id_is_404_without_mutation() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;
    let before = job_count(&app).await;

    let (status, body) = call(&app, test::TestRequest::delete().uri("/api/job/missing")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Not found"));
    assert!(body.get("sucess").is_none());
    assert_eq!(job_count(&app).await, before);
}

#[actix_web::test]
async fn patch_merges_instead_of_replacing() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;
    let (_, created) = call(
        &app,
        test::TestRequest::post().uri("/api/job").set_json(new_job()),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = call(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/job/{id}"))
            .set_json(json!({ "jobSalary": 999 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated = &body["data"];
    assert_eq!(updated["jobSalary"], json!(999));
    assert_eq!(updated["employerName"], created["data"]["employerName"]);
    assert_eq!(updated["jobTitle"], created["data"]["jobTitle"]);
    assert_eq!(updated["jobDescription"], created["data"]["jobDescription"]);
    assert_eq!(updated["createdAt"], created["data"]["createdAt"]);
    assert!(updated["updatedAt"].is_string());

    let (_, fetched) = call(
        &app,
        test::TestRequest::get().uri(&format!("/api/job/{id}")),
    )
    .await;
    assert_eq!(&fetched["data"], updated);
}

#[actix_web::test]
async fn patch_of_unknown_id_is_404() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;

    let (status, body) = call(
        &app,
        test::TestRequest::patch()
            .uri("/api/job/42")
            .set_json(json!({ "jobTitle": "Ghost" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}

#[actix_web::test]
async fn empty_create_is_rejected_without_mutation() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;
    let before = job_count(&app).await;

    let (status, body) = call(
        &app,
        test::TestRequest::post().uri("/api/job").set_json(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("missing fields"));
    assert_eq!(job_count(&app).await, before);
}

#[actix_web::test]
async fn single_field_create_is_accepted() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;

    let (status, body) = call(
        &app,
        test::TestRequest::post()
            .uri("/api/job")
            .set_json(json!({ "jobTitle": "Solo" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["jobTitle"], json!("Solo"));
    assert!(body["data"].get("employerName").is_none());
}

#[actix_web::test]
async fn malformed_body_is_a_400_envelope() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;

    let (status, body) = call(
        &app,
        test::TestRequest::post()
            .uri("/api/job")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"jobTitle\": "),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[actix_web::test]
async fn corrupt_data_file_surfaces_500_with_detail() {
    let (dir, store) = temp_store();
    std::fs::write(dir.path().join("db.json"), "not json at all").unwrap();
    let app = init_app(store).await;

    let (status, body) = call(&app, test::TestRequest::get().uri("/api/job")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Error retrieving job"));
    assert!(body["error"].is_string());

    let (status, body) = call(
        &app,
        test::TestRequest::post().uri("/api/job").set_json(new_job()),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], json!("Error creating job"));
}

#[actix_web::test]
async fn writes_are_visible_to_a_fresh_store() {
    let (dir, store) = temp_store();
    let app = init_app(store).await;
    let (_, created) = call(
        &app,
        test::TestRequest::post().uri("/api/job").set_json(new_job()),
    )
    .await;

    let reopened = DocumentStore::new(dir.path().join("db.json"), Default::default());
    let doc = reopened.read().await.unwrap();

    assert_eq!(doc.job.len(), 4);
    assert_eq!(json!(doc.job[3].id), created["data"]["id"]);
    assert!(!dir.path().join("db.json.tmp").exists());
}

#[actix_web::test]
async fn banner_and_unknown_routes() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;

    let (status, body) = call(&app, test::TestRequest::get().uri("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"]["updateResource"], json!("PATCH /api/job/:id"));

    let (status, body) = call(&app, test::TestRequest::get().uri("/api/jobs")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Route not found"));
    assert_eq!(body["requestedUrl"], json!("/api/jobs"));
}

#[actix_web::test]
async fn health_checks_reflect_store_state() {
    let (dir, store) = temp_store();
    let app = init_app(store).await;

    let (status, body) = call(&app, test::TestRequest::get().uri("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));

    std::fs::write(dir.path().join("db.json"), "{").unwrap();
    let (status, body) = call(&app, test::TestRequest::get().uri("/ready")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], json!("not_ready"));

    let (status, _) = call(&app, test::TestRequest::get().uri("/live")).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn trailing_slash_serves_the_list() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;

    let (status, body) = call(&app, test::TestRequest::get().uri("/api/job/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(3));
}

#[actix_web::test]
async fn patch_with_null_clears_the_field() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;

    let (status, body) = call(
        &app,
        test::TestRequest::patch()
            .uri("/api/job/1")
            .set_json(json!({ "jobTitle": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["jobTitle"], Value::Null);
    assert!(body["data"].as_object().unwrap().contains_key("jobTitle"));
    assert_eq!(body["data"]["employerName"], json!("Amazon"));

    let (_, fetched) = call(&app, test::TestRequest::get().uri("/api/job/1")).await;
    assert!(fetched["data"].as_object().unwrap().contains_key("jobTitle"));
    assert_eq!(fetched["data"]["jobTitle"], Value::Null);
}

#[actix_web::test]
async fn patch_never_rejects_the_body() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;

    let (status, body) = call(&app, test::TestRequest::patch().uri("/api/job/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["jobTitle"], json!("Software Developer"));
    assert!(body["data"]["updatedAt"].is_string());

    let (status, body) = call(&app, test::TestRequest::patch().uri("/api/job/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Not found"));

    let (status, body) = call(
        &app,
        test::TestRequest::patch()
            .uri("/api/job/2")
            .set_json(json!({ "jobSalary": "120k" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["jobSalary"], json!("120k"));

    let (status, fetched) = call(&app, test::TestRequest::get().uri("/api/job/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["jobSalary"], json!("120k"));
}

#[actix_web::test]
async fn records_with_unexpected_types_still_load() {
    let (dir, store) = temp_store();
    std::fs::write(
        dir.path().join("db.json"),
        r#"{"job":[{"id":1,"jobSalary":"120k","jobTitle":null},{"id":2,"jobTitle":"Clerk"}]}"#,
    )
    .unwrap();
    let app = init_app(store).await;

    let (status, body) = call(&app, test::TestRequest::get().uri("/api/job/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["jobSalary"], json!("120k"));
    assert_eq!(body["data"]["jobTitle"], Value::Null);

    assert_eq!(job_count(&app).await, 2);

    let (status, _) = call(&app, test::TestRequest::get().uri("/api/job/x")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn each_patch_stamps_a_later_updated_at() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;
    let (_, created) = call(
        &app,
        test::TestRequest::post().uri("/api/job").set_json(new_job()),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (_, first) = call(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/job/{id}"))
            .set_json(json!({ "jobSalary": 999 })),
    )
    .await;
    rt::time::sleep(Duration::from_millis(10)).await;
    let (_, second) = call(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/job/{id}"))
            .set_json(json!({ "jobSalary": 1000 })),
    )
    .await;

    let first_stamp = first["data"]["updatedAt"].as_str().unwrap();
    let second_stamp = second["data"]["updatedAt"].as_str().unwrap();
    assert!(second_stamp > first_stamp, "{second_stamp} <= {first_stamp}");
    assert!(first_stamp > created["data"]["createdAt"].as_str().unwrap());
    assert_eq!(second["data"]["createdAt"], created["data"]["createdAt"]);
}

#[actix_web::test]
async fn patch_stamps_seed_record_without_created_at() {
    let (_dir, store) = temp_store();
    let app = init_app(store).await;

    let (status, body) = call(
        &app,
        test::TestRequest::patch()
            .uri("/api/job/3")
            .set_json(json!({ "jobLocation": "Remote" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["jobLocation"], json!("Remote"));
    assert_eq!(body["data"]["employerName"], json!("Crunchy Tech"));
    assert!(body["data"]["updatedAt"].is_string());
    assert!(body["data"].get("createdAt").is_none());
}
