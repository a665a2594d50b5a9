use actix_web::HttpResponse;

/// Liveness probe: answers `200 OK` with an empty body while the process serves requests.
#[tracing::instrument(name = "Checking service health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
