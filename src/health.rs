use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::catalog::adapter::outgoing::{ContentCounts, StaticContentStore};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content: ContentCounts,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Content is loaded and validated before the server binds, so this only reports sizes
#[get("/ready")]
pub async fn readiness(store: web::Data<StaticContentStore>) -> impl Responder {
    HttpResponse::Ok().json(ReadinessResponse {
        status: "ok",
        content: store.counts(),
    })
}
