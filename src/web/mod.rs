// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::environment::EnvironmentConfig;
use crate::relevance::KeywordExtractor;
use crate::render::PdfEngine;
use anyhow::{Context, Result};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use std::time::Duration;
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

// Routes

#[post("/generate", data = "<form>")]
pub async fn generate_resume(
    form: Form<ResumeForm<'_>>,
    extractor: &State<KeywordExtractor>,
    engine: &State<PdfEngine>,
) -> Result<DocumentResponse, ApiError> {
    handlers::generate_resume_handler(form, extractor, engine).await
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[get("/styles")]
pub async fn get_styles() -> Json<DataResponse<Vec<StyleInfo>>> {
    handlers::get_styles_handler().await
}

#[options("/<_..>")]
pub async fn options_catch_all() -> Status {
    Status::Ok
}

// Error catchers

#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check the multipart form encoding".to_string(),
            "Verify repeated fields are submitted per list entry".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Endpoint not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Available endpoints: POST /api/generate, GET /api/health, GET /api/styles"
            .to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

// Main server start function
pub async fn start_web_server(config: EnvironmentConfig, port: u16) -> Result<()> {
    let extractor = KeywordExtractor::new(
        config.keyword_limit,
        Duration::from_secs(config.fetch_timeout_secs),
    )?;
    let engine = PdfEngine::new(config.workspace_path.clone())?;

    info!("Starting résumé builder API server");
    info!("PDF workspace: {}", config.workspace_path.display());
    info!("Keyword limit: {}", config.keyword_limit);

    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"))
        .merge(("limits.file", "8MiB"))
        .merge(("limits.data-form", "12MiB"));

    rocket::custom(figment)
        .attach(Cors)
        .manage(extractor)
        .manage(engine)
        .register("/api", catchers![bad_request, not_found, internal_error])
        .mount(
            "/api",
            routes![generate_resume, health, get_styles, options_catch_all],
        )
        .launch()
        .await
        .context("Rocket server failed")?;

    Ok(())
}
